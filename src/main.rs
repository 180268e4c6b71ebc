use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use careerpath::catalog::Catalog;
use careerpath::config::AppConfig;
use careerpath::error::AppError;
use careerpath::telemetry;
use careerpath::workflows::applications::{
    applications_router, ApplicationsService, InMemoryAdmissions, InMemoryApplications,
    TracingNotifier,
};
use careerpath::workflows::matching::{
    CandidateProfile, JobBoard, JobBoardCsvImporter, JobDraft, JobPosting, MatchEngine,
    QualificationLevel,
};
use careerpath::workflows::qualification::{
    CareerCheckOutcome, CourseCheckOutcome, OfflineCheckReport, ProfileDraft, ProfileGuard,
    QualificationEngine, StudentProfile,
};
use careerpath::workflows::transcript::TranscriptExtractor;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    catalog: Arc<Catalog>,
    engine: Arc<QualificationEngine>,
    matcher: Arc<MatchEngine>,
    extractor: Arc<TranscriptExtractor>,
    board: Arc<JobBoard>,
    guard: ProfileGuard,
    max_transcript_bytes: usize,
}

#[derive(Parser, Debug)]
#[command(
    name = "Career Guidance Service",
    about = "Run the career guidance engines from the command line or serve them over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run an offline qualification check for a profile
    Qualify(QualifyArgs),
    /// Rank job postings against a candidate profile
    MatchJobs(MatchJobsArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct QualifyArgs {
    /// Grade point average on the 0.0-5.0 scale
    #[arg(long)]
    gpa: f32,
    /// Qualification level (certificate, diploma, degree, masters, phd)
    #[arg(long)]
    level: String,
    /// Comma-separated subject list
    #[arg(long, value_delimiter = ',')]
    subjects: Vec<String>,
    /// English proficiency has been demonstrated
    #[arg(long)]
    english: bool,
    /// Field of study or interest
    #[arg(long)]
    field: Option<String>,
    /// Check a single course instead of the full career sweep
    #[arg(long)]
    course: Option<String>,
}

#[derive(Args, Debug)]
struct MatchJobsArgs {
    /// Comma-separated skill list
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,
    /// Qualification level (certificate, diploma, degree, masters, phd)
    #[arg(long)]
    level: String,
    /// Preferred work location
    #[arg(long)]
    location: Option<String>,
    /// Comma-separated interest list
    #[arg(long, value_delimiter = ',')]
    interests: Vec<String>,
    /// Years of work experience
    #[arg(long, default_value_t = 0)]
    experience: u8,
    /// Optional job export CSV to load onto the board
    #[arg(long)]
    jobs_csv: Option<PathBuf>,
    /// Number of postings to display
    #[arg(long, default_value_t = 5)]
    top: usize,
}

#[derive(Debug, Deserialize)]
struct CourseCheckRequest {
    profile: ProfileDraft,
    course_name: String,
}

#[derive(Debug, Deserialize)]
struct CareerCheckRequest {
    profile: ProfileDraft,
    career: String,
}

#[derive(Debug, Deserialize)]
struct OfflineCheckRequest {
    profile: ProfileDraft,
}

#[derive(Debug, Deserialize)]
struct RankJobsRequest {
    candidate: CandidateProfile,
    /// Postings to rank; defaults to the live job board.
    #[serde(default)]
    jobs: Option<Vec<JobPosting>>,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RankedJobView {
    posting: JobPosting,
    match_score: u8,
    matched_skills: Vec<String>,
    reasons: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RankJobsResponse {
    ranked: Vec<RankedJobView>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Qualify(args) => run_qualify(args),
        Command::MatchJobs(args) => run_match_jobs(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(Catalog::standard());
    let engine = Arc::new(QualificationEngine::new(catalog.clone()));
    let board = Arc::new(JobBoard::seeded(&catalog));

    let applications_service = Arc::new(ApplicationsService::new(
        engine.clone(),
        Arc::new(InMemoryApplications::default()),
        Arc::new(InMemoryAdmissions::default()),
        Arc::new(TracingNotifier),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        catalog,
        engine,
        matcher: Arc::new(MatchEngine::default()),
        extractor: Arc::new(TranscriptExtractor::new()),
        board,
        guard: ProfileGuard::default(),
        max_transcript_bytes: config.uploads.max_transcript_bytes,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/qualification/check", post(course_check_endpoint))
        .route("/api/v1/qualification/career", post(career_check_endpoint))
        .route(
            "/api/v1/qualification/offline-check",
            post(offline_check_endpoint),
        )
        .route("/api/v1/matching/rank", post(rank_jobs_endpoint))
        .route("/api/v1/transcripts/parse", post(parse_transcript_endpoint))
        .route("/api/v1/catalog/courses", get(list_courses_endpoint))
        .route("/api/v1/catalog/careers", get(list_careers_endpoint))
        .route(
            "/api/v1/catalog/institutions",
            get(list_institutions_endpoint),
        )
        .route(
            "/api/v1/jobs",
            get(list_jobs_endpoint).post(post_job_endpoint),
        )
        .route("/api/v1/jobs/:job_id", axum::routing::delete(remove_job_endpoint))
        .with_state(state)
        .merge(applications_router(applications_service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career guidance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_qualify(args: QualifyArgs) -> Result<(), AppError> {
    let QualifyArgs {
        gpa,
        level,
        subjects,
        english,
        field,
        course,
    } = args;

    let draft = ProfileDraft {
        gpa: Some(gpa),
        qualification_level: Some(level),
        field,
        subjects,
        english_proficiency: english,
    };

    let guard = ProfileGuard::default();
    let profile = guard.profile_from_draft(draft)?;

    let catalog = Arc::new(Catalog::standard());
    let engine = QualificationEngine::new(catalog);

    match course {
        Some(course_name) => {
            let outcome = engine.check_course(&profile, &course_name);
            render_course_outcome(&outcome);
        }
        None => {
            let report = engine.offline_check(&profile);
            render_offline_report(&profile, &report);
        }
    }

    Ok(())
}

fn run_match_jobs(args: MatchJobsArgs) -> Result<(), AppError> {
    let MatchJobsArgs {
        skills,
        level,
        location,
        interests,
        experience,
        jobs_csv,
        top,
    } = args;

    let qualification_level = match QualificationLevel::from_label(&level) {
        Some(parsed) => parsed,
        None => {
            println!("Unrecognised level '{level}', treating as certificate");
            QualificationLevel::Certificate
        }
    };

    let candidate = CandidateProfile {
        skills,
        qualification_level,
        preferred_location: location,
        interests,
        experience_years: experience,
    };

    let catalog = Catalog::standard();
    let board = JobBoard::seeded(&catalog);
    if let Some(path) = jobs_csv {
        let summary = JobBoardCsvImporter::from_path(path, &board)?;
        println!(
            "Imported {} posting(s), skipped {}",
            summary.imported, summary.skipped
        );
    }

    let matcher = MatchEngine::default();
    let postings = board.all();
    let ranked = matcher.rank(&candidate, &postings);

    println!("Job matches ({} posting(s) considered)", postings.len());
    for entry in ranked.iter().take(top) {
        println!(
            "- [{:>3}] {} at {} ({})",
            entry.match_score, entry.posting.title, entry.posting.company, entry.posting.location
        );
        for reason in matcher.match_reasons(&candidate, &entry.posting) {
            println!("      {reason}");
        }
    }

    Ok(())
}

fn render_course_outcome(outcome: &CourseCheckOutcome) {
    println!("Course check: {}", outcome.course_name);
    if outcome.used_default_requirements {
        println!("(no catalog entry; level defaults applied)");
    }
    if outcome.qualified {
        println!("Qualified: yes");
    } else {
        println!("Qualified: no");
        for reason in &outcome.reasons {
            println!("- {reason}");
        }
    }
    if !outcome.recommendations.is_empty() {
        println!("\nRecommendations");
        for recommendation in &outcome.recommendations {
            println!("- {recommendation}");
        }
    }
}

fn render_offline_report(profile: &StudentProfile, report: &OfflineCheckReport) {
    println!(
        "Offline qualification check (GPA {:.2}, {} level)",
        profile.gpa,
        profile.qualification_level.label()
    );
    if profile.level_assumed {
        println!("(qualification level was not recognised; degree assumed)");
    }

    if report.possible_careers.is_empty() {
        println!("\nPossible careers: none at the current level");
    } else {
        println!("\nPossible careers");
        for career in &report.possible_careers {
            println!("- {career}");
            if let Some(courses) = report.career_specific_courses.get(career) {
                for course in courses {
                    println!("    via {course}");
                }
            }
        }
    }

    if report.recommended_courses.is_empty() {
        println!("\nRecommended courses: none for this tier");
    } else {
        println!("\nRecommended courses");
        for course in &report.recommended_courses {
            println!("- {course}");
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn course_check_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CourseCheckRequest>,
) -> Result<Json<CourseCheckOutcome>, AppError> {
    let profile = state.guard.profile_from_draft(payload.profile)?;
    Ok(Json(state.engine.check_course(&profile, &payload.course_name)))
}

async fn career_check_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CareerCheckRequest>,
) -> Result<Json<CareerCheckOutcome>, AppError> {
    let profile = state.guard.profile_from_draft(payload.profile)?;
    Ok(Json(state.engine.check_career(&profile, &payload.career)))
}

async fn offline_check_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<OfflineCheckRequest>,
) -> Result<Json<OfflineCheckReport>, AppError> {
    let profile = state.guard.profile_from_draft(payload.profile)?;
    Ok(Json(state.engine.offline_check(&profile)))
}

async fn rank_jobs_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<RankJobsRequest>,
) -> Json<RankJobsResponse> {
    let RankJobsRequest {
        candidate,
        jobs,
        limit,
    } = payload;

    let postings = jobs.unwrap_or_else(|| state.board.all());
    let mut ranked = state.matcher.rank(&candidate, &postings);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    let ranked = ranked
        .into_iter()
        .map(|entry| {
            let reasons = state.matcher.match_reasons(&candidate, &entry.posting);
            RankedJobView {
                posting: entry.posting,
                match_score: entry.match_score,
                matched_skills: entry.matched_skills,
                reasons,
            }
        })
        .collect();

    Json(RankJobsResponse { ranked })
}

async fn parse_transcript_endpoint(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if body.len() > state.max_transcript_bytes {
        let payload = json!({
            "error": format!(
                "transcript exceeds the {} byte upload limit",
                state.max_transcript_bytes
            ),
        });
        return (StatusCode::PAYLOAD_TOO_LARGE, Json(payload)).into_response();
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("text/plain");

    match state.extractor.parse(&body, content_type) {
        Ok(extraction) => (StatusCode::OK, Json(extraction)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

async fn list_courses_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.courses().to_vec())
}

async fn list_careers_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.careers().to_vec())
}

async fn list_institutions_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.institutions().to_vec())
}

async fn list_jobs_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.board.all())
}

async fn post_job_endpoint(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> impl IntoResponse {
    let posting = state.board.add(draft);
    (StatusCode::CREATED, Json(posting))
}

async fn remove_job_endpoint(
    State(state): State<AppState>,
    axum::extract::Path(job_id): axum::extract::Path<String>,
) -> impl IntoResponse {
    if state.board.remove(&job_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        let payload = json!({ "error": "job posting not found" });
        (StatusCode::NOT_FOUND, Json(payload)).into_response()
    }
}
