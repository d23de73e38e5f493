//! Metadata resource handlers, generic over the catalog kind.

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value, json};

use fleetmeta_common::error::SUCCESS;
use fleetmeta_metadata::{CatalogService, MetaKind, kind};

use crate::api::error_response;
use crate::state::AppState;

fn success_response() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "code": SUCCESS.code, "message": SUCCESS.message }))
}

async fn get_all<K: MetaKind>(state: web::Data<AppState>) -> HttpResponse {
    let mut service = CatalogService::<K>::new(state.db.clone());
    match service.get_all().await {
        Ok(entities) => HttpResponse::Ok().json(entities),
        Err(err) => error_response(&err),
    }
}

async fn get_by_id<K: MetaKind>(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let mut service = CatalogService::<K>::new(state.db.clone());
    match service.get_by_id(path.into_inner()).await {
        Ok(entity) => HttpResponse::Ok().json(entity),
        Err(err) => error_response(&err),
    }
}

async fn create<K: MetaKind>(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> HttpResponse {
    let mut service = CatalogService::<K>::new(state.db.clone());
    match service.create(&body).await {
        Ok(entity) => HttpResponse::Ok().json(entity),
        Err(err) => error_response(&err),
    }
}

async fn update<K: MetaKind>(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<Map<String, Value>>,
) -> HttpResponse {
    let mut service = CatalogService::<K>::new(state.db.clone());
    match service.update(path.into_inner(), &body).await {
        Ok(entity) => HttpResponse::Ok().json(entity),
        Err(err) => error_response(&err),
    }
}

async fn delete<K: MetaKind>(state: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let mut service = CatalogService::<K>::new(state.db.clone());
    match service.delete(path.into_inner()).await {
        Ok(()) => success_response(),
        Err(err) => error_response(&err),
    }
}

async fn app_db_list(state: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let service = CatalogService::<kind::App>::new(state.db.clone());
    match service.db_id_list(path.into_inner()).await {
        Ok(ids) => HttpResponse::Ok().json(ids),
        Err(err) => error_response(&err),
    }
}

async fn app_add_db(state: web::Data<AppState>, path: web::Path<(i32, i32)>) -> HttpResponse {
    let (app_id, db_id) = path.into_inner();
    let service = CatalogService::<kind::App>::new(state.db.clone());
    match service.add_db(app_id, db_id).await {
        Ok(()) => success_response(),
        Err(err) => error_response(&err),
    }
}

async fn app_delete_db(state: web::Data<AppState>, path: web::Path<(i32, i32)>) -> HttpResponse {
    let (app_id, db_id) = path.into_inner();
    let service = CatalogService::<kind::App>::new(state.db.clone());
    match service.delete_db(app_id, db_id).await {
        Ok(()) => success_response(),
        Err(err) => error_response(&err),
    }
}

async fn db_app_list(state: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let service = CatalogService::<kind::Db>::new(state.db.clone());
    match service.app_id_list(path.into_inner()).await {
        Ok(ids) => HttpResponse::Ok().json(ids),
        Err(err) => error_response(&err),
    }
}

async fn mysql_cluster_servers(state: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let service = CatalogService::<kind::MysqlCluster>::new(state.db.clone());
    match service.mysql_server_id_list(path.into_inner()).await {
        Ok(ids) => HttpResponse::Ok().json(ids),
        Err(err) => error_response(&err),
    }
}

async fn mysql_cluster_monitor_system(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let service = CatalogService::<kind::MysqlCluster>::new(state.db.clone());
    match service.monitor_system(path.into_inner()).await {
        Ok(monitor) => HttpResponse::Ok().json(monitor),
        Err(err) => error_response(&err),
    }
}

async fn mysql_cluster_middleware_cluster(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let service = CatalogService::<kind::MysqlCluster>::new(state.db.clone());
    match service.middleware_cluster(path.into_inner()).await {
        Ok(cluster) => HttpResponse::Ok().json(cluster),
        Err(err) => error_response(&err),
    }
}

async fn middleware_cluster_servers(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let service = CatalogService::<kind::MiddlewareCluster>::new(state.db.clone());
    match service.middleware_server_id_list(path.into_inner()).await {
        Ok(ids) => HttpResponse::Ok().json(ids),
        Err(err) => error_response(&err),
    }
}

async fn mysql_server_monitor_system(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let service = CatalogService::<kind::MysqlServer>::new(state.db.clone());
    match service.monitor_system(path.into_inner()).await {
        Ok(monitor) => HttpResponse::Ok().json(monitor),
        Err(err) => error_response(&err),
    }
}

fn kind_scope<K: MetaKind>(resource: &str) -> actix_web::Scope {
    web::scope(&format!("/metadata/{resource}"))
        .route("", web::get().to(get_all::<K>))
        .route("", web::post().to(create::<K>))
        .route("/{id}", web::get().to(get_by_id::<K>))
        .route("/{id}", web::post().to(update::<K>))
        .route("/{id}", web::delete().to(delete::<K>))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        kind_scope::<kind::App>("app")
            .route("/{id}/dbs", web::get().to(app_db_list))
            .route("/{id}/db/{db_id}", web::post().to(app_add_db))
            .route("/{id}/db/{db_id}", web::delete().to(app_delete_db)),
    );
    cfg.service(kind_scope::<kind::Db>("db").route("/{id}/apps", web::get().to(db_app_list)));
    cfg.service(kind_scope::<kind::Env>("env"));
    cfg.service(
        kind_scope::<kind::MiddlewareCluster>("middleware-cluster")
            .route("/{id}/servers", web::get().to(middleware_cluster_servers)),
    );
    cfg.service(kind_scope::<kind::MiddlewareServer>("middleware-server"));
    cfg.service(kind_scope::<kind::MonitorSystem>("monitor-system"));
    cfg.service(
        kind_scope::<kind::MysqlCluster>("mysql-cluster")
            .route("/{id}/servers", web::get().to(mysql_cluster_servers))
            .route(
                "/{id}/monitor-system",
                web::get().to(mysql_cluster_monitor_system),
            )
            .route(
                "/{id}/middleware-cluster",
                web::get().to(mysql_cluster_middleware_cluster),
            ),
    );
    cfg.service(
        kind_scope::<kind::MysqlServer>("mysql-server").route(
            "/{id}/monitor-system",
            web::get().to(mysql_server_monitor_system),
        ),
    );
    cfg.service(kind_scope::<kind::User>("user"));
}
