//! xFood Engine Service - stateless recommendation and search endpoints
//!
//! The engine itself is pure; the caller posts the user, catalog, and
//! interaction log and gets ranked or filtered results back. The reference
//! time for freshness defaults to the wall clock here at the edge, never
//! inside the engine.

use actix_web::{web, App, HttpResponse, HttpServer};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use xfood_engine::{
    BakerProfile, Coordinates, Interaction, Post, RecommendationEngine, SearchCriteria, UserProfile,
};

#[derive(Debug, Deserialize)]
struct PostRecommendationRequest {
    user: UserProfile,
    posts: Vec<Post>,
    #[serde(default)]
    interactions: Vec<Interaction>,
    #[serde(default)]
    now: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct BakerRecommendationRequest {
    user: UserProfile,
    bakers: Vec<BakerProfile>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    posts: Vec<Post>,
    #[serde(default)]
    criteria: SearchCriteria,
    #[serde(default)]
    user_coordinates: Option<Coordinates>,
}

async fn recommend_posts(
    engine: web::Data<RecommendationEngine>,
    body: web::Json<PostRecommendationRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    let now = req.now.unwrap_or_else(Utc::now);
    let results = engine.score_posts(&req.user, &req.posts, &req.interactions, now);
    HttpResponse::Ok().json(results)
}

async fn recommend_bakers(
    engine: web::Data<RecommendationEngine>,
    body: web::Json<BakerRecommendationRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    let results = engine.score_bakers(&req.user, &req.bakers);
    HttpResponse::Ok().json(results)
}

async fn search_posts(
    engine: web::Data<RecommendationEngine>,
    body: web::Json<SearchRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    let results = engine.filter_posts(&req.posts, &req.criteria, req.user_coordinates);
    HttpResponse::Ok().json(results)
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "xfood-engine",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();

    info!("Starting xFood Engine on port 8082");

    HttpServer::new(|| {
        App::new()
            .app_data(web::Data::new(RecommendationEngine::with_default_config()))
            .route("/health", web::get().to(health_check))
            .route("/recommendations/posts", web::post().to(recommend_posts))
            .route("/recommendations/bakers", web::post().to(recommend_bakers))
            .route("/search/posts", web::post().to(search_posts))
    })
    .bind(("0.0.0.0", 8082))?
    .run()
    .await?;

    Ok(())
}
