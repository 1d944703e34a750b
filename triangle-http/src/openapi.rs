use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Triangle Test Calculator API",
        description = "Exact one-sided binomial p-values for the sensory triangle test"
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::calculate::calculate_get,
        crate::handlers::calculate::calculate_post,
    ),
    components(schemas(
        crate::dto::CalculateRequest,
        triangle::TriangleReport,
        triangle::error::ErrorResponse,
    )),
    tags(
        (name = "triangle", description = "Triangle test calculation"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
