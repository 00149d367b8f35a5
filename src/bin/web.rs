//! Stateless JSON service over the pairing and bracket engine.
//! Run with: cargo run --bin web
//! Every request carries the full tournament snapshot; nothing is stored here.
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT. Log level via RUST_LOG.

use actix_web::{
    get, post,
    web::{self, Json},
    App, HttpResponse, HttpServer, Responder,
};
use doubles_swiss::{
    build_bracket, compute_standings, generate_round_pairings, submit_bracket_score,
    write_standings_csv, BracketMatch, GameMatch, Player, PoolBracketConfig, RoundOptions,
    ScoringRules, Table,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

/// Request bodies carry whole rosters and match logs.
const JSON_LIMIT_BYTES: usize = 4 * 1024 * 1024;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct GenerateRoundBody {
    players: Vec<Player>,
    #[serde(default)]
    matches: Vec<GameMatch>,
    round: u32,
    #[serde(default)]
    tables: Vec<Table>,
    #[serde(default)]
    options: RoundOptions,
    /// Fixes round-1 shuffles and random byes when set.
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct StandingsBody {
    players: Vec<Player>,
    #[serde(default)]
    matches: Vec<GameMatch>,
    #[serde(default)]
    scoring: ScoringRules,
}

#[derive(Deserialize)]
struct BuildBracketBody {
    pools: Vec<PoolBracketConfig>,
    players: Vec<Player>,
}

#[derive(Deserialize)]
struct SubmitBracketScoreBody {
    matches: Vec<BracketMatch>,
    match_id: String,
    score_1: u32,
    score_2: u32,
    #[serde(default)]
    twenties_1: u32,
    #[serde(default)]
    twenties_2: u32,
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "doubles-swiss",
    })
}

/// Generate the next round's matches and byes.
#[post("/api/rounds/generate")]
async fn api_generate_round(body: Json<GenerateRoundBody>) -> HttpResponse {
    let mut rng = match body.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pairings = generate_round_pairings(
        &body.players,
        &body.matches,
        body.round,
        &body.tables,
        &body.options,
        &mut rng,
    );
    HttpResponse::Ok().json(pairings)
}

/// Ranked standings derived from the match log.
#[post("/api/standings")]
async fn api_standings(body: Json<StandingsBody>) -> HttpResponse {
    HttpResponse::Ok().json(compute_standings(&body.players, &body.matches, &body.scoring))
}

/// Ranked standings as CSV.
#[post("/api/standings/csv")]
async fn api_standings_csv(body: Json<StandingsBody>) -> HttpResponse {
    let standings = compute_standings(&body.players, &body.matches, &body.scoring);
    let mut out = Vec::new();
    match write_standings_csv(&standings, &mut out) {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(out),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Build elimination brackets for the given pools.
#[post("/api/brackets")]
async fn api_build_bracket(body: Json<BuildBracketBody>) -> HttpResponse {
    match build_bracket(&body.pools, &body.players) {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => bad_request(e),
    }
}

/// Submit (or edit) a bracket score; returns the updated bracket.
#[post("/api/brackets/score")]
async fn api_submit_bracket_score(body: Json<SubmitBracketScoreBody>) -> HttpResponse {
    let body = body.into_inner();
    if body.score_1 == body.score_2 {
        return bad_request("Bracket matches cannot end in a tie");
    }
    let mut matches = body.matches;
    match submit_bracket_score(
        &mut matches,
        &body.match_id,
        body.score_1,
        body.score_2,
        body.twenties_1,
        body.twenties_2,
    ) {
        Ok(()) => HttpResponse::Ok().json(matches),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT_BYTES))
            .service(api_health)
            .service(api_generate_round)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_build_bracket)
            .service(api_submit_bracket_score)
    })
    .bind(bind)?
    .run()
    .await
}
