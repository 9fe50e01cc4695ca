use dioxus::prelude::*;

use crate::core::fetch::{fetch_json, FetchError};
use crate::core::platform;
use crate::core::services::SiteServices;
use crate::t;

use super::grade::Grade;
use super::record::{MetricsDisplay, MetricsRecord};

#[component]
pub fn MetricsPanel() -> Element {
    let services = use_context::<SiteServices>();

    let metrics = use_resource(move || {
        let services = services.clone();
        async move {
            let outcome = load_metrics(&services).await;
            if let Err(err) = &outcome {
                tracing::error!("Failed to load metrics: {err}");
                platform::blocking_notice(&t!("metrics-load-notice"));
            }
            outcome
        }
    });

    let (display, failed) = match metrics() {
        Some(Ok(display)) => (Some(display), false),
        Some(Err(_)) => (None, true),
        None => (None, false),
    };

    let pending = display.is_none();
    let shown = display.unwrap_or_else(MetricsDisplay::pending);
    let precision_grade = (!pending).then_some(shown.precision_grade);
    let recall_grade = (!pending).then_some(shown.recall_grade);

    rsx! {
        section { class: "metrics-card",
            div { class: "metrics-card__header",
                h2 { {t!("metrics-title")} }
                span { class: "metrics-card__meta",
                    {t!("metrics-updated")}
                    " "
                    span { id: "ts", "{shown.timestamp}" }
                }
            }

            div { class: "metrics-card__grid",
                {metric_tile("precision", t!("metrics-precision"), shown.precision.clone(), precision_grade)}
                {metric_tile("recall", t!("metrics-recall"), shown.recall.clone(), recall_grade)}
                {metric_tile("f1", t!("metrics-f1"), shown.f1.clone(), None)}
                {metric_tile("threshold", t!("metrics-threshold"), shown.threshold.clone(), None)}
                {metric_tile("nsamples", t!("metrics-samples"), shown.n_samples.clone(), None)}
            }

            if failed {
                p { class: "metrics-card__error", "⚠️ " {t!("metrics-load-notice")} }
            }
        }
    }
}

async fn load_metrics(services: &SiteServices) -> Result<MetricsDisplay, FetchError> {
    let path = services.config.documents.metrics.as_str();
    let record: MetricsRecord = fetch_json(services.fetcher.as_ref(), path).await?;
    Ok(MetricsDisplay::from_record(&record))
}

fn metric_tile(id: &'static str, label: String, value: String, grade: Option<Grade>) -> Element {
    let grade_class = grade.map(Grade::css_class).unwrap_or_default();

    rsx! {
        div { class: "metric",
            span { class: "metric__label", "{label}" }
            span { id: "{id}", class: "metric__value {grade_class}", "{value}" }
        }
    }
}
