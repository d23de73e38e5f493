//! HTTP adapter: route registration and error-to-status mapping.
//!
//! Handlers only unmarshal requests, call a service and marshal the
//! result; every domain rule lives below this layer.

use actix_web::{HttpResponse, web};
use serde_json::json;

use fleetmeta_common::{MetaError, error as codes};

pub mod metadata;
pub mod sqladvisor;

pub fn routes(cfg: &mut web::ServiceConfig) {
    metadata::routes(cfg);
    sqladvisor::routes(cfg);
}

/// Map a service error to the documented client-visible status code.
pub(crate) fn error_response(err: &anyhow::Error) -> HttpResponse {
    let (mut response, code) = match err.downcast_ref::<MetaError>() {
        Some(MetaError::NotFound { .. }) => {
            (HttpResponse::NotFound(), codes::RESOURCE_NOT_FOUND)
        }
        Some(MetaError::DuplicateKey { .. }) => (HttpResponse::Conflict(), codes::DUPLICATE_KEY),
        Some(MetaError::RelationshipConflict(_)) => {
            (HttpResponse::Conflict(), codes::RELATIONSHIP_CONFLICT)
        }
        Some(
            MetaError::FieldNotExists { .. }
            | MetaError::FieldNotSettable { .. }
            | MetaError::FieldTypeMismatch { .. }
            | MetaError::FieldInvalid { .. },
        ) => (HttpResponse::BadRequest(), codes::FIELD_VALIDATION_ERROR),
        Some(MetaError::TransactionFailure(_)) => {
            (HttpResponse::InternalServerError(), codes::TRANSACTION_ERROR)
        }
        Some(MetaError::Advisor(_)) => (HttpResponse::BadGateway(), codes::ADVISOR_ERROR),
        _ => (HttpResponse::InternalServerError(), codes::SERVER_ERROR),
    };
    response.json(json!({ "code": code.code, "message": err.to_string() }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    fn status_of(err: MetaError) -> StatusCode {
        error_response(&err.into()).status()
    }

    #[test]
    fn test_error_response_status_mapping() {
        assert_eq!(
            status_of(MetaError::not_found("app", "id 1")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(MetaError::duplicate_key("app", "app_name 'x'")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(MetaError::RelationshipConflict("bound".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(MetaError::FieldNotExists {
                kind: "app",
                names: "nickname".into(),
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(MetaError::TransactionFailure("commit".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(MetaError::Advisor("exit 1".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}
