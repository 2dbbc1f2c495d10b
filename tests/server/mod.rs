use actix_web::{App, HttpResponse, HttpServer, web};
use serde::Deserialize;

#[derive(Deserialize)]
struct InsightBody {
    #[serde(rename = "onPageSeoData")]
    on_page_seo_data: String,
    #[serde(rename = "technicalSeoData")]
    technical_seo_data: String,
}

pub const CANNED_RECOMMENDATION: &str =
    "Start by fixing the broken links, then shorten the title tag.";

/// Spawns a mock insight service on a random port and returns its base URL.
pub async fn get_insight_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route("/recommend", web::post().to(recommend))
            .route(
                "/server-error",
                web::post().to(|| async { HttpResponse::InternalServerError().body("Error") }),
            )
            .route(
                "/malformed",
                web::post().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({ "unexpected": true }))
                }),
            )
    })
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}

/// Succeeds only when both groups arrive as parseable JSON with the expected
/// audit shape, so tests catch wire-format regressions.
async fn recommend(body: web::Json<InsightBody>) -> HttpResponse {
    let on_page: serde_json::Value = match serde_json::from_str(&body.on_page_seo_data) {
        Ok(value) => value,
        Err(_) => return HttpResponse::BadRequest().body("onPageSeoData is not JSON"),
    };
    let technical: serde_json::Value = match serde_json::from_str(&body.technical_seo_data) {
        Ok(value) => value,
        Err(_) => return HttpResponse::BadRequest().body("technicalSeoData is not JSON"),
    };

    if on_page.get("title").is_none() || technical.get("pageSpeed").is_none() {
        return HttpResponse::BadRequest().body("unexpected audit shape");
    }

    HttpResponse::Ok().json(serde_json::json!({ "recommendations": CANNED_RECOMMENDATION }))
}
