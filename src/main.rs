mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use core::actions::find_action;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use std::io;
use std::time::Duration;
use ui::{
    ActivePanel, CommandBar, Dialog, LayoutMode, Panel, PanelStatus, StatusBar, ViewerOverlay,
    WarningScreen,
};
use utils::{error::Result, formatter::format_file_size};

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new()?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // 비디오 재생 위치 전진
        app.tick();

        let toast = app.toast_text();

        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(&app.theme);
                    f.render_widget(warning, size);
                }
                LayoutMode::DualPanel => {
                    render_main_ui(f, app, toast.as_deref());
                }
            }
        })?;

        // 재생 클록이 돌 때는 짧은 타임아웃으로 다시 그림
        let poll_timeout = if app.is_video_playing() {
            Duration::from_millis(33)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.is_viewer_active() {
                        app.handle_viewer_key(key);
                    } else if app.is_dialog_active() {
                        app.handle_dialog_key(key);
                    } else if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 듀얼 패널 + 상태바 + 커맨드바 + 오버레이 렌더링
fn render_main_ui(f: &mut Frame, app: &App, toast: Option<&str>) {
    let areas = app.layout.areas().clone();

    for (slot, area) in [
        (ActivePanel::Left, areas.left_panel),
        (ActivePanel::Right, areas.right_panel),
    ] {
        let pane = app.pane(slot);
        let status = if app.layout.active_panel() == slot {
            PanelStatus::Active
        } else {
            PanelStatus::Inactive
        };

        let title = format!(" {} ", pane.current_path.display());
        let panel = Panel::new()
            .title(&title)
            .status(status)
            .entries(&pane.entries)
            .selected(pane.selected)
            .scroll_offset(pane.scroll_offset)
            .filter(pane.filter.as_deref())
            .theme(&app.theme);
        f.render_widget(panel, area);
    }

    let active = app.active_pane();
    let total_size = format_file_size(active.total_size());
    let status_bar = StatusBar::new()
        .file_count(active.file_count())
        .dir_count(active.dir_count())
        .total_size(&total_size)
        .toast(toast)
        .theme(&app.theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new(&app.command_items).theme(&app.theme);
    f.render_widget(command_bar, areas.command_bar);

    // 뷰어는 패널 영역 전체를 덮음
    if let Some(viewer) = &app.viewer {
        let panels = Rect::new(
            areas.left_panel.x,
            areas.left_panel.y,
            areas.left_panel.width + areas.right_panel.width,
            areas.left_panel.height,
        );
        f.render_widget(ViewerOverlay::new(viewer).theme(&app.theme), panels);
    }

    // 다이얼로그는 항상 최상단
    if let Some(dialog) = &app.dialog {
        f.render_widget(Dialog::new(dialog).theme(&app.theme), f.area());
    }
}
