use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result as ActixResult};
use graphx_core::{Error, Graph, GraphId, NodeId};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::matrix::{AdjacencyTable, IncidenceTable};
use crate::service::GraphService;

type Service = web::Data<Arc<GraphService>>;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PathQuery {
    from_node: NodeId,
    to_node: NodeId,
}

#[derive(Deserialize)]
struct StartQuery {
    #[serde(rename = "startNode", alias = "startedNode")]
    start_node: NodeId,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(service: Arc<GraphService>, host: &str, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .wrap(cors())
                .app_data(web::Data::new(service.clone()))
                .configure(configure)
        })
        .bind((host, port))?
        .run()
        .await
    }
}

/// Registers every `/api/v1` route. Expects `web::Data<Arc<GraphService>>`
/// in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/graph", web::post().to(create_graph))
            .route("/graph", web::get().to(list_graphs))
            .route("/graph/{id}", web::get().to(get_graph))
            .route("/graph/{id}", web::put().to(update_graph))
            .route("/graph/{id}", web::delete().to(delete_graph))
            .route("/graph/{id}/adjacencyMatrix", web::get().to(adjacency_matrix))
            .route("/graph/{id}/incidenceMatrix", web::get().to(incidence_matrix))
            .route("/graph/{id}/shortestPath", web::get().to(shortest_path))
            .route("/graph/{id}/allShortestPath", web::get().to(all_shortest_paths))
            .route("/graph/{id}/allPaths", web::get().to(all_paths))
            .route("/graph/{id}/hamiltonianPath", web::get().to(hamiltonian_path))
            .route("/graph/{id}/eulerianCycle", web::get().to(eulerian_cycle))
            .route("/graph/{id}/planarCheck", web::get().to(planar_check))
            .route("/graph/{id}/planarReduction", web::get().to(planar_reduction))
            .route("/graph/{id}/tree", web::get().to(tree))
            .route("/graph/{id}/isTree", web::get().to(is_tree))
            .route("/graph/{id}/diameter", web::get().to(diameter))
            .route("/graph/{id}/radius", web::get().to(radius))
            .route("/graph/{id}/center", web::get().to(center))
            .route("/graph/{id}/cartesian/{other}", web::get().to(cartesian)),
    );
}

/// Echoes any origin back with credentials allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _| true)
        .supports_credentials()
        .allowed_methods(vec!["GET", "POST", "OPTIONS", "DELETE", "PUT"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
}

fn error_response(e: &Error) -> HttpResponse {
    let body = json!({ "error": e.to_string() });
    match e {
        Error::GraphNotFound(_) | Error::PathNotFound(_) => HttpResponse::NotFound().json(body),
        Error::Storage(_) => {
            warn!(error = %e, "request failed");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Turns a service result into a 200 response built by `ok`, or the mapped
/// error response.
fn respond<T>(result: graphx_core::Result<T>, ok: impl FnOnce(T) -> HttpResponse) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(value) => ok(value),
        Err(e) => error_response(&e),
    })
}

async fn create_graph(service: Service, req: web::Json<Graph>) -> ActixResult<HttpResponse> {
    respond(service.create_graph(req.into_inner()), |id| {
        HttpResponse::Ok().json(json!({ "id": id }))
    })
}

async fn list_graphs(service: Service) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(service.list()))
}

async fn get_graph(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.graph(path.into_inner()), |graph| HttpResponse::Ok().json(graph))
}

async fn update_graph(
    service: Service,
    path: web::Path<GraphId>,
    req: web::Json<Graph>,
) -> ActixResult<HttpResponse> {
    respond(service.update_graph(path.into_inner(), req.into_inner()), |()| {
        HttpResponse::Ok().json(json!({ "result": true }))
    })
}

async fn delete_graph(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    match service.delete_graph(id) {
        Ok(true) => Ok(HttpResponse::Ok().json(json!({ "result": true }))),
        Ok(false) => Ok(error_response(&Error::GraphNotFound(id))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn adjacency_matrix(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.adjacency_matrix(path.into_inner()), |matrix| {
        HttpResponse::Ok().json(json!({ "matrix": AdjacencyTable::from(&matrix) }))
    })
}

async fn incidence_matrix(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.incidence_matrix(path.into_inner()), |matrix| {
        HttpResponse::Ok().json(json!({ "matrix": IncidenceTable::from(&matrix) }))
    })
}

async fn shortest_path(
    service: Service,
    path: web::Path<GraphId>,
    query: web::Query<PathQuery>,
) -> ActixResult<HttpResponse> {
    respond(service.shortest_path(path.into_inner(), query.from_node, query.to_node), |path| {
        HttpResponse::Ok().json(json!({ "path": path }))
    })
}

async fn all_shortest_paths(
    service: Service,
    path: web::Path<GraphId>,
    query: web::Query<PathQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        service.all_shortest_paths(path.into_inner(), query.from_node, query.to_node),
        |paths| HttpResponse::Ok().json(json!({ "paths": paths })),
    )
}

async fn all_paths(
    service: Service,
    path: web::Path<GraphId>,
    query: web::Query<PathQuery>,
) -> ActixResult<HttpResponse> {
    respond(service.all_paths(path.into_inner(), query.from_node, query.to_node), |paths| {
        HttpResponse::Ok().json(json!({ "paths": paths }))
    })
}

async fn hamiltonian_path(
    service: Service,
    path: web::Path<GraphId>,
    query: web::Query<StartQuery>,
) -> ActixResult<HttpResponse> {
    respond(service.hamiltonian_path(path.into_inner(), query.start_node), |path| {
        HttpResponse::Ok().json(json!({ "path": path }))
    })
}

async fn eulerian_cycle(
    service: Service,
    path: web::Path<GraphId>,
    query: web::Query<StartQuery>,
) -> ActixResult<HttpResponse> {
    respond(service.eulerian_cycle(path.into_inner(), query.start_node), |path| {
        HttpResponse::Ok().json(json!({ "path": path }))
    })
}

async fn planar_check(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.planar_check(path.into_inner()), |planar| {
        HttpResponse::Ok().json(json!({ "isPlanar": planar }))
    })
}

async fn planar_reduction(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.planar_reduction(path.into_inner()), |graph| HttpResponse::Ok().json(graph))
}

async fn tree(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.tree(path.into_inner()), |graph| HttpResponse::Ok().json(graph))
}

async fn is_tree(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.is_tree(path.into_inner()), |tree| {
        HttpResponse::Ok().json(json!({ "isTree": tree }))
    })
}

async fn diameter(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.diameter(path.into_inner()), |diameter| {
        HttpResponse::Ok().json(json!({ "diameter": diameter }))
    })
}

async fn radius(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.radius(path.into_inner()), |radius| {
        HttpResponse::Ok().json(json!({ "radius": radius }))
    })
}

async fn center(service: Service, path: web::Path<GraphId>) -> ActixResult<HttpResponse> {
    respond(service.center(path.into_inner()), |center| {
        HttpResponse::Ok().json(json!({ "center": center }))
    })
}

async fn cartesian(
    service: Service,
    path: web::Path<(GraphId, GraphId)>,
) -> ActixResult<HttpResponse> {
    let (id, other) = path.into_inner();
    respond(service.cartesian(id, other), |graph| HttpResponse::Ok().json(graph))
}
