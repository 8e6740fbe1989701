//! Fixture generation endpoints

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bracketeer_core::{
    parse_list, parse_roster, parse_seed, FixtureError, Fixtures, KnockoutResult, RosterFormat,
    Round, TournamentFormat,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::ServerState;

const DEFAULT_NAME: &str = "Tournament";

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_format() -> String {
    "knockout".to_string()
}

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Deserialize)]
pub struct KnockoutRequest {
    #[serde(default = "default_name")]
    pub name: String,
    pub teams: Vec<String>,
    #[serde(default)]
    pub seeds: Vec<String>,
    /// Overrides the server's RNG seed for this request
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct RoundRobinRequest {
    #[serde(default = "default_name")]
    pub name: String,
    pub teams: Vec<String>,
}

#[derive(Deserialize)]
pub struct FixturesRequest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_format")]
    pub format: String,
    pub teams: Vec<String>,
    #[serde(default)]
    pub seeds: Vec<String>,
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct KnockoutResponse {
    pub name: String,
    pub format: &'static str,
    pub fixtures: KnockoutResult,
}

#[derive(Serialize)]
pub struct RoundRobinResponse {
    pub name: String,
    pub format: &'static str,
    /// League rounds followed by playoff rounds
    pub rounds: Vec<Round>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum FixturesResponse {
    Knockout(KnockoutResponse),
    RoundRobin(RoundRobinResponse),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(err: FixtureError) -> ApiError {
    bad_form(err.to_string())
}

fn bad_form(error: String) -> ApiError {
    tracing::warn!("Rejected fixture request: {}", error);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

fn fixtures_response(name: String, fixtures: Fixtures) -> FixturesResponse {
    match fixtures {
        Fixtures::Knockout(fixtures) => FixturesResponse::Knockout(KnockoutResponse {
            name,
            format: "knockout",
            fixtures,
        }),
        Fixtures::RoundRobin(schedule) => FixturesResponse::RoundRobin(RoundRobinResponse {
            name,
            format: "round_robin",
            rounds: schedule.into_rounds(),
        }),
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /api/knockout
pub async fn knockout_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<KnockoutRequest>,
) -> Result<Json<KnockoutResponse>, ApiError> {
    let mut generator = state.generator_for(req.seed).map_err(bad_request)?;
    let fixtures = generator
        .knockout(&req.teams, &req.seeds)
        .map_err(bad_request)?;

    tracing::info!("Knockout '{}' generated for {} teams", req.name, req.teams.len());
    Ok(Json(KnockoutResponse {
        name: req.name,
        format: "knockout",
        fixtures,
    }))
}

/// POST /api/round-robin
pub async fn round_robin_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<RoundRobinRequest>,
) -> Result<Json<RoundRobinResponse>, ApiError> {
    let generator = state.generator_for(None).map_err(bad_request)?;
    let schedule = generator.round_robin(&req.teams).map_err(bad_request)?;

    tracing::info!("Round robin '{}' generated for {} teams", req.name, req.teams.len());
    Ok(Json(RoundRobinResponse {
        name: req.name,
        format: "round_robin",
        rounds: schedule.into_rounds(),
    }))
}

/// POST /api/fixtures - single endpoint taking the format in the body
pub async fn fixtures_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<FixturesRequest>,
) -> Result<Json<FixturesResponse>, ApiError> {
    let format: TournamentFormat = req.format.parse().map_err(bad_request)?;
    let mut generator = state.generator_for(req.seed).map_err(bad_request)?;
    let fixtures = generator
        .generate(format, &req.teams, &req.seeds)
        .map_err(bad_request)?;

    tracing::info!("Fixtures '{}' generated ({:?})", req.name, format);
    Ok(Json(fixtures_response(req.name, fixtures)))
}

/// Fields collected from an upload form
#[derive(Default)]
struct UploadForm {
    roster: Option<(String, String)>,
    name: Option<String>,
    format: Option<String>,
    seeds: Option<String>,
    seed: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| bad_form(format!("Malformed upload: {}", e)))?
        {
            let key = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().unwrap_or("teams.txt").to_string();
            let value = field
                .text()
                .await
                .map_err(|e| bad_form(format!("Unreadable field '{}': {}", key, e)))?;

            match key.as_str() {
                "file" => form.roster = Some((file_name, value)),
                "name" => form.name = Some(value),
                "format" => form.format = Some(value),
                "seeds" => form.seeds = Some(value),
                "seed" => form.seed = Some(value),
                other => tracing::debug!("Ignoring upload field '{}'", other),
            }
        }
        Ok(form)
    }
}

/// POST /api/upload - multipart form with a `.txt`/`.csv` team file.
///
/// Optional fields: `format` (default knockout), `seeds` (comma-separated),
/// `name` and `seed`.
pub async fn upload_handler(
    State(state): State<Arc<ServerState>>,
    multipart: Multipart,
) -> Result<Json<FixturesResponse>, ApiError> {
    let form = UploadForm::read(multipart).await?;

    let (file_name, text) = form
        .roster
        .ok_or_else(|| bad_form("Missing 'file' field".to_string()))?;
    let roster_format = RosterFormat::from_file_name(&file_name).map_err(bad_request)?;
    let teams = parse_roster(&text, roster_format);

    let format: TournamentFormat = match form.format.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.parse().map_err(bad_request)?,
        _ => TournamentFormat::default(),
    };
    let seeds = form.seeds.as_deref().map(parse_list).unwrap_or_default();
    let seed = match form.seed.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(parse_seed(raw).map_err(bad_request)?),
        _ => None,
    };
    let name = form
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(default_name);

    let mut generator = state.generator_for(seed).map_err(bad_request)?;
    let fixtures = generator
        .generate(format, &teams, &seeds)
        .map_err(bad_request)?;

    tracing::info!(
        "Fixtures '{}' generated from upload '{}' ({} teams)",
        name,
        file_name,
        teams.len()
    );
    Ok(Json(fixtures_response(name, fixtures)))
}
