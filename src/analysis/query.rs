//! Free-text query interpretation.
//!
//! A deliberately narrow interpreter: intents are matched by keyword
//! conjunction and a single regex extracts the worker name. Anything the
//! patterns do not cover falls through to a low-confidence default answer,
//! so interpretation itself never fails.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::analysis::hours_balance::calculate_annual_hours;
use crate::config::EnginePolicy;
use crate::models::{
    HoursResult, HoursStatus, QueryData, QueryResponse, RequestStatus, TimeOffRequest, TimeReport,
    Worker,
};

/// Confidence when the August load is above the policy cutoff.
pub const CONFIDENCE_CAUTIONARY: f64 = 0.8;
/// Confidence when the August load leaves room for another absence.
pub const CONFIDENCE_PERMISSIVE: f64 = 0.9;
/// Confidence when the question names nobody the roster knows.
pub const CONFIDENCE_GENERIC_CAUTION: f64 = 0.7;
/// Confidence when workers with excess hours were found.
pub const CONFIDENCE_EXCESS_FOUND: f64 = 0.95;
/// Confidence when no worker carries excess hours.
pub const CONFIDENCE_NO_EXCESS: f64 = 0.9;
/// Confidence of the fallback answer for unrecognized questions.
pub const CONFIDENCE_FALLBACK: f64 = 0.3;

const EXCESS_EXAMPLE_LIMIT: usize = 3;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)puede\s+(\p{L}+)\s+coger").expect("hardcoded pattern is valid")
});

/// Answers a free-text question about the supplied scheduling data.
///
/// Two intents are recognized: vacation feasibility in August (a vacation
/// keyword plus "agosto") and hour excess ("exceso" plus "horas"). The
/// feasibility intent extracts a first name with the `puede <name> coger`
/// pattern and counts approved requests starting in August; the excess
/// intent runs the annual hours calculation and reports workers above the
/// balanced band. Unrecognized questions, and internal failures such as a
/// missing time report, yield the fallback answer instead of an error.
///
/// # Examples
///
/// ```
/// use workforce_engine::analysis::{process_query, CONFIDENCE_FALLBACK};
/// use workforce_engine::config::EnginePolicy;
///
/// let response = process_query("¿Qué tiempo hace hoy?", &[], &[], &[], &EnginePolicy::default());
/// assert_eq!(response.confidence, CONFIDENCE_FALLBACK);
/// ```
///
/// # Arguments
///
/// * `text` - The question as typed by the user
/// * `workers` - Roster used to resolve extracted names
/// * `requests` - Request collection used for the August load count
/// * `reports` - Time reports feeding the hours calculation
/// * `policy` - Engine policy carrying the August cutoff and hour thresholds
pub fn process_query(
    text: &str,
    workers: &[Worker],
    requests: &[TimeOffRequest],
    reports: &[TimeReport],
    policy: &EnginePolicy,
) -> QueryResponse {
    let normalized = text.to_lowercase();

    if (normalized.contains("vacacion") || normalized.contains("vacación"))
        && normalized.contains("agosto")
    {
        return answer_august_feasibility(text, workers, requests, policy);
    }

    if normalized.contains("exceso") && normalized.contains("horas") {
        return answer_hour_excess(workers, reports, policy);
    }

    fallback_response()
}

fn answer_august_feasibility(
    text: &str,
    workers: &[Worker],
    requests: &[TimeOffRequest],
    policy: &EnginePolicy,
) -> QueryResponse {
    let requested_name = NAME_PATTERN
        .captures(text)
        .map(|captures| captures[1].to_lowercase());

    let worker = requested_name
        .as_deref()
        .and_then(|name| workers.iter().find(|w| w.first_name().to_lowercase() == name));

    let Some(worker) = worker else {
        return QueryResponse {
            answer: "Conviene revisar el calendario de agosto antes de aprobar nuevas vacaciones"
                .to_string(),
            related: None,
            confidence: CONFIDENCE_GENERIC_CAUTION,
        };
    };

    let approved_in_august = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Approved && r.start_date.month() == 8)
        .count() as u32;

    let (answer, confidence) = if approved_in_august > policy.august_request_cutoff {
        (
            format!(
                "Conviene esperar: ya hay {} solicitudes aprobadas que empiezan en agosto, \
                 por lo que las vacaciones de {} podrían dejar el calendario muy cargado",
                approved_in_august, worker.name
            ),
            CONFIDENCE_CAUTIONARY,
        )
    } else {
        (
            format!(
                "Sí, {} puede coger vacaciones en agosto; solo hay {} solicitudes aprobadas \
                 para ese mes",
                worker.name, approved_in_august
            ),
            CONFIDENCE_PERMISSIVE,
        )
    };

    QueryResponse {
        answer,
        related: Some(QueryData::AugustLoad {
            worker_id: worker.id.clone(),
            approved_requests: approved_in_august,
        }),
        confidence,
    }
}

fn answer_hour_excess(
    workers: &[Worker],
    reports: &[TimeReport],
    policy: &EnginePolicy,
) -> QueryResponse {
    let Ok(results) = calculate_annual_hours(workers, reports, policy) else {
        return fallback_response();
    };

    let excess: Vec<HoursResult> = results
        .into_iter()
        .filter(|r| r.status == HoursStatus::Excess)
        .collect();

    if excess.is_empty() {
        return QueryResponse {
            answer: "Ningún trabajador presenta exceso de horas en este periodo".to_string(),
            related: None,
            confidence: CONFIDENCE_NO_EXCESS,
        };
    }

    let examples = excess
        .iter()
        .take(EXCESS_EXAMPLE_LIMIT)
        .map(|r| format!("{} (+{} horas)", r.worker_name, r.adjusted_difference))
        .collect::<Vec<_>>()
        .join(", ");

    let answer = if excess.len() == 1 {
        format!("Un trabajador presenta exceso de horas: {examples}")
    } else {
        format!(
            "{} trabajadores presentan exceso de horas, por ejemplo: {}",
            excess.len(),
            examples
        )
    };

    QueryResponse {
        answer,
        related: Some(QueryData::ExcessWorkers(excess)),
        confidence: CONFIDENCE_EXCESS_FOUND,
    }
}

fn fallback_response() -> QueryResponse {
    QueryResponse {
        answer: "No dispongo de información suficiente para responder a esa consulta".to_string(),
        related: None,
        confidence: CONFIDENCE_FALLBACK,
    }
}
