//! Weather Hub - debounced city weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tui_dispatch::{
    EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_hub::action::Action;
use weather_hub::api::ClientConfig;
use weather_hub::components::{Component, WeatherWidget, WeatherWidgetProps};
use weather_hub::config::{
    DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_INTRO_SECS, DEFAULT_TIMEOUT_SECS, Settings,
};
use weather_hub::effect::{Effect, Services, handle_effect};
use weather_hub::logging;
use weather_hub::reducer::reducer;
use weather_hub::state::AppState;

/// Weather Hub - type a city, get current conditions and a 5-day forecast
#[derive(Parser, Debug)]
#[command(name = "weather-hub")]
#[command(about = "Debounced city weather lookup backed by OpenWeatherMap")]
struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// City to look up once the intro is over
    #[arg(long, short)]
    city: Option<String>,

    /// Quiet period after the last keystroke before a lookup fires
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS, value_parser = clap::value_parser!(u64).range(1..))]
    debounce_ms: u64,

    /// How long the welcome message stays up
    #[arg(long, default_value_t = DEFAULT_INTRO_SECS)]
    intro_secs: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Directory for log files (defaults to the platform cache dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WidgetComponentId {
    Widget,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WidgetContext {
    Main,
}

impl EventRoutingState<WidgetComponentId, WidgetContext> for AppState {
    fn focused(&self) -> Option<WidgetComponentId> {
        Some(WidgetComponentId::Widget)
    }

    fn modal(&self) -> Option<WidgetComponentId> {
        None
    }

    fn binding_context(&self, _id: WidgetComponentId) -> WidgetContext {
        WidgetContext::Main
    }

    fn default_context(&self) -> WidgetContext {
        WidgetContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        base_url,
        city,
        debounce_ms,
        intro_secs,
        timeout_secs,
        log_dir,
        debug: debug_args,
    } = Args::parse();

    let client_config = ClientConfig::new(api_key)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(timeout_secs));
    let settings = Settings::new(client_config, log_dir)
        .with_debounce(Duration::from_millis(debounce_ms))
        .with_intro(Duration::from_secs(intro_secs));

    let _log_guard = logging::init(&settings.log_dir)?;
    info!(?settings, "starting weather-hub");

    let services = Services::new(settings)
        .map(Arc::new)
        .map_err(|e| io::Error::other(format!("http client: {e}")))?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(city)) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, services).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    info!("weather-hub exited");
    Ok(())
}

struct WidgetUi {
    widget: WeatherWidget,
}

impl WidgetUi {
    fn new() -> Self {
        Self {
            widget: WeatherWidget::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WidgetComponentId>,
    ) {
        event_ctx.set_component_area(WidgetComponentId::Widget, area);

        let props = WeatherWidgetProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.widget.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherWidgetProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.widget.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    services: Arc<Services>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WidgetUi::new()));
    let mut bus: EventBus<AppState, Action, WidgetComponentId, WidgetContext> = EventBus::new();
    let keybindings: Keybindings<WidgetContext> = Keybindings::new();

    let ui_widget = Rc::clone(&ui);
    bus.register(WidgetComponentId::Widget, move |event, state| {
        ui_widget.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx.tasks(), &services),
        )
        .await
}
