//! Reducer - pure function: (state, action) -> DispatchResult

use tracing::debug;
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            let mut effects = vec![Effect::StartIntroTimer];
            effects.extend(schedule_lookup(state));
            DispatchResult::changed_with_many(effects)
        }

        Action::IntroDidElapse => {
            if state.intro_visible {
                state.intro_visible = false;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== City input =====
        Action::CityInputChange(text) => {
            state.query = text;
            let effect = schedule_lookup(state).unwrap_or(Effect::CancelLookup);
            DispatchResult::changed_with(effect)
        }

        Action::CityLookupDue { seq, city } => {
            if seq != state.input_seq {
                debug!(seq, latest = state.input_seq, "dropping superseded lookup");
                return DispatchResult::unchanged();
            }
            state.request_seq = seq;
            state.request_city = city.clone();
            DispatchResult::changed_with(Effect::FetchCurrent { seq, city })
        }

        // ===== Current conditions =====
        Action::CurrentDidLoad { seq, weather } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            state.apply_weather(weather);
            DispatchResult::changed_with(Effect::FetchForecast {
                seq,
                city: state.request_city.clone(),
            })
        }

        Action::CurrentDidError { seq, message } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            debug!(seq, %message, "current weather lookup failed");
            state.apply_lookup_error();
            DispatchResult::changed()
        }

        // ===== Forecast =====
        Action::ForecastDidLoad { seq, entries } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            state.forecast = entries;
            DispatchResult::changed()
        }

        Action::ForecastDidError { seq, message } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            debug!(seq, %message, "forecast lookup failed");
            state.forecast.clear();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Bump the keystroke sequence and build the debounce effect for the
/// current query. `None` only when the input is empty; a whitespace-only
/// query still looks up (and fails as not found).
fn schedule_lookup(state: &mut AppState) -> Option<Effect> {
    state.input_seq += 1;
    if state.query.is_empty() {
        return None;
    }
    Some(Effect::ScheduleLookup {
        seq: state.input_seq,
        city: state.query.trim().to_string(),
    })
}

fn is_stale(state: &AppState, seq: u64) -> bool {
    if seq == state.request_seq {
        return false;
    }
    debug!(seq, current = state.request_seq, "discarding stale response");
    true
}
