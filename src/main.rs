//! Stadium View - actor-based client for the InStadium API
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering of the page
//! - App Layer - owns the page and applies responses to it
//! - Network Layer (Tokio) - async API calls

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use stadium_view::app::{AppActor, AppState};
use stadium_view::config::Settings;
use stadium_view::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use stadium_view::markup::row_count;
use stadium_view::messages::ui_events::{key_to_ui_event, InputField, InputMode};
use stadium_view::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use stadium_view::network::{ApiClient, HttpTransport, NetworkActor};
use stadium_view::ui::{highlight_markup, level_color, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let settings = Settings::load()?;
    let base = settings.api_base()?;
    tracing::info!(base = %base, timeout = ?settings.timeout(), "Starting {} {}", APP_NAME, APP_VERSION);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = ApiClient::new(HttpTransport::new(settings.timeout()), base);
    let state = AppState::new(client.base().as_str());
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(state, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.input_mode, current_state.show_help) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    draw_form(f, state, columns[0]);
    draw_page(f, state, columns[1]);
    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(format!(" {} ", state.api_base)),
        Span::styled(
            format!(" reloads: {} ", state.reloads),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut constraints: Vec<Constraint> = InputField::ALL.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(3)); // Activity log
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in InputField::ALL.iter().enumerate() {
        let is_focused = state.focus == *field;
        let is_editing = is_focused && state.input_mode == InputMode::Editing;
        let title = format!(" {} ({}) ", field.label(), field.id());
        f.render_widget(render_input(state.value(*field), &title, is_focused, is_editing), chunks[i]);

        if is_editing {
            let max_x = chunks[i].x + chunks[i].width.saturating_sub(2);
            let cursor_x = (chunks[i].x + state.cursor_position as u16 + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, chunks[i].y + 1));
        }
    }

    let items: Vec<ListItem> = state
        .activity
        .iter()
        .map(|entry| {
            ListItem::new(format!("{} {}", entry.timestamp.format("%H:%M:%S"), entry.message))
                .style(Style::default().fg(level_color(entry.level)))
        })
        .collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title(" Console "));
    f.render_widget(log, chunks[InputField::ALL.len()]);
}

fn draw_page(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // #error
            Constraint::Percentage(50), // #artists
            Constraint::Min(3),         // #choreographies
        ])
        .split(area);

    let error = Paragraph::new(state.error_html.as_str())
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title(" #error "));
    f.render_widget(error, chunks[0]);

    draw_container(f, "#artists", &state.artists_html, state.markup_scroll, chunks[1]);
    draw_container(f, "#choreographies", &state.choreographies_html, state.markup_scroll, chunks[2]);
}

fn draw_container(f: &mut Frame, id: &str, html: &str, scroll: u16, area: Rect) {
    let title = if html.is_empty() {
        format!(" {} ", id)
    } else {
        format!(" {} ({} rows) ", id, row_count(html))
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let markup = Paragraph::new(highlight_markup(html))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(markup, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        String::from(" ESC:stop editing | arrows:move | Tab:next field ")
    } else {
        let loading = if state.in_flight > 0 {
            format!(" [{} pending]", state.in_flight)
        } else {
            String::new()
        };
        format!(
            " Tab:field | e:edit | c:create | u:update | d:delete | r:reload | ?:help | q:quit{}",
            loading
        )
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 STADIUM VIEW - Keyboard Shortcuts

 FORM
   Tab / Shift+Tab    Switch fields
   e / Enter          Edit current field
   Esc                Stop editing

 PAGE
   a                  List artists
   g                  List choreographies
   c                  Create choreography (name, description)
   u                  Update artist (old unique name, name, unique name)
   d                  Delete choreography (name to delete)
   r / F5             Reload page
   ↑ / ↓              Scroll tables

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
