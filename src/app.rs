use leptos::html::Input;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{CycleState, PredictionService, SubmissionGate},
    domain::{
        logging::LogComponent,
        prediction::{Prediction, Ticker},
    },
    infrastructure::{rendering::LineChart, ui},
    log_warn,
};

pub const CHART_CANVAS_ID: &str = "prediction-chart";

/// Root component for the AlphaPulse prediction page
#[component]
pub fn App() -> impl IntoView {
    // Sections exist after the first render, so the observer attaches here
    create_effect(move |_| {
        ui::init_scroll_reveal(".section, .hero");
    });

    view! {
        <style>
            {r#"
            .alphapulse-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #10141a;
                min-height: 100vh;
                color: #e8e8e8;
            }

            .hero {
                text-align: center;
                padding: 80px 20px 40px;
            }

            .section {
                max-width: 720px;
                margin: 0 auto;
                padding: 40px 20px;
            }

            .reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: all 0.8s cubic-bezier(0.165, 0.84, 0.44, 1);
            }

            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .prediction-form {
                display: flex;
                gap: 10px;
                justify-content: center;
            }

            .prediction-form input {
                padding: 10px 14px;
                border-radius: 8px;
                border: 1px solid #3a4452;
                background: #1a212b;
                color: inherit;
                text-transform: uppercase;
            }

            .prediction-form button {
                padding: 10px 18px;
                border-radius: 8px;
                border: none;
                background: #2D5A27;
                color: white;
                cursor: pointer;
            }

            .prediction-form button:disabled {
                opacity: 0.5;
                cursor: wait;
            }

            .loader {
                text-align: center;
                margin: 20px 0;
                color: #a0a0a0;
            }

            .prediction-result {
                margin-top: 30px;
            }

            .result-grid {
                display: flex;
                gap: 30px;
                justify-content: center;
                margin-bottom: 20px;
            }

            .result-item {
                text-align: center;
            }

            .result-value {
                font-size: 22px;
                font-weight: 700;
            }

            .result-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 4px;
            }

            .prediction-badge {
                padding: 4px 12px;
                border-radius: 12px;
                font-weight: 700;
            }

            .prediction-badge.up {
                background: #2D5A27;
                color: white;
            }

            .prediction-badge.down {
                background: #A63D40;
                color: white;
            }

            .chart-wrapper {
                display: flex;
                justify-content: center;
            }

            .hidden {
                display: none;
            }
            "#}
        </style>
        <div class="alphapulse-app">
            <Hero />
            <PredictionSection />
            <MethodologySection />
        </div>
    }
}

/// Landing hero, first of the revealed sections
#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"AlphaPulse"</h1>
            <p>"Next-day direction signals for any listed ticker"</p>
        </div>
    }
}

#[component]
fn MethodologySection() -> impl IntoView {
    view! {
        <div class="section">
            <h2>"How it works"</h2>
            <p>
                "The engine scores recent momentum and volatility features "
                "against a trained classifier and reports its historical hit "
                "rate alongside every call."
            </p>
        </div>
    }
}

/// The prediction view: form, loader, result panel, and history chart.
///
/// Owns one request/response/render cycle per submission. Submissions are
/// serialized: the submit control is disabled while a request is pending,
/// and a stale completion is discarded by the gate.
#[component]
fn PredictionSection() -> impl IntoView {
    let (state, set_state) = create_signal(CycleState::Idle);
    let (prediction, set_prediction) = create_signal::<Option<Prediction>>(None);

    let input_ref = create_node_ref::<Input>();
    let gate = Rc::new(RefCell::new(SubmissionGate::new()));
    let chart = Rc::new(RefCell::new(Option::<LineChart>::None));
    let service = PredictionService::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let raw = input_ref.get().map(|input| input.value()).unwrap_or_default();
        // Empty or all-whitespace input: no request, no UI change
        let Ok(ticker) = Ticker::new(&raw) else {
            return;
        };

        let Some(generation) = gate.borrow_mut().begin() else {
            log_warn!(
                LogComponent::Presentation("PredictionSection"),
                "Submission ignored, a request is already pending"
            );
            return;
        };

        set_state.set(CycleState::Loading);

        let gate = Rc::clone(&gate);
        let chart = Rc::clone(&chart);
        let service = service.clone();
        spawn_local(async move {
            let result = service.predict(&ticker).await;

            if !gate.borrow_mut().finish(generation) {
                log_warn!(
                    LogComponent::Presentation("PredictionSection"),
                    "Discarding stale prediction response"
                );
                return;
            }

            match result {
                Ok(new_prediction) => {
                    if !new_prediction.history.is_empty() {
                        // Exactly one live chart: drop the old one first
                        if let Some(old_chart) = chart.borrow_mut().take() {
                            old_chart.destroy();
                        }
                        match LineChart::render(
                            CHART_CANVAS_ID,
                            &new_prediction.history,
                            new_prediction.direction,
                        ) {
                            Ok(new_chart) => {
                                *chart.borrow_mut() = Some(new_chart);
                            }
                            Err(e) => {
                                set_state.set(CycleState::Failed);
                                ui::notify_failure(&format!("Chart rendering failed: {}", e));
                                return;
                            }
                        }
                    }
                    set_prediction.set(Some(new_prediction));
                    set_state.set(CycleState::Rendered);
                }
                Err(e) => {
                    set_state.set(CycleState::Failed);
                    ui::notify_failure(&format!("Prediction cycle failed: {}", e));
                }
            }
        });
    };

    view! {
        <div class="section">
            <h2>"Run a prediction"</h2>
            <form id="prediction-form" class="prediction-form" on:submit=on_submit>
                <input
                    id="ticker-input"
                    type="text"
                    node_ref=input_ref
                    placeholder="e.g. AAPL"
                    maxlength="8"
                />
                <button type="submit" prop:disabled=move || state.get().shows_loader()>
                    "Analyze"
                </button>
            </form>

            <div id="loader" class="loader" class:hidden=move || !state.get().shows_loader()>
                "Analyzing market signals..."
            </div>

            <div
                id="prediction-result"
                class="prediction-result"
                class:hidden=move || !state.get().shows_result()
            >
                <div class="result-grid">
                    <div class="result-item">
                        <div id="res-ticker" class="result-value">
                            {move || prediction.get().map(|p| p.ticker).unwrap_or_default()}
                        </div>
                        <div class="result-label">"Ticker"</div>
                    </div>
                    <div class="result-item">
                        <div id="res-price" class="result-value">
                            {move || {
                                prediction.get().map(|p| p.formatted_price()).unwrap_or_default()
                            }}
                        </div>
                        <div class="result-label">"Last Close"</div>
                    </div>
                    <div class="result-item">
                        <span
                            id="res-direction"
                            class=move || {
                                prediction
                                    .get()
                                    .map(|p| p.direction.badge_class())
                                    .unwrap_or_else(|| "prediction-badge".to_string())
                            }
                        >
                            {move || {
                                prediction.get().map(|p| p.direction.to_string()).unwrap_or_default()
                            }}
                        </span>
                        <div class="result-label">"Signal"</div>
                    </div>
                    <div class="result-item">
                        <div id="res-conf" class="result-value">
                            {move || {
                                prediction
                                    .get()
                                    .map(|p| p.formatted_confidence())
                                    .unwrap_or_default()
                            }}
                        </div>
                        <div class="result-label">"Confidence"</div>
                    </div>
                    <div class="result-item">
                        <div id="res-accuracy" class="result-value">
                            {move || {
                                prediction
                                    .get()
                                    .map(|p| p.formatted_accuracy())
                                    .unwrap_or_default()
                            }}
                        </div>
                        <div class="result-label">"Model Accuracy"</div>
                    </div>
                </div>
                <div class="chart-wrapper">
                    <canvas id=CHART_CANVAS_ID width="680" height="320"></canvas>
                </div>
            </div>
        </div>
    }
}
