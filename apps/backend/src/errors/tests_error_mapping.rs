// Unit tests for error mapping - pure domain logic without HTTP or storage dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::AppError;

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Technology, "index 7 out of range");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "TECHNOLOGY_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra_to_500() {
    let read = DomainError::infra(InfraErrorKind::StorageRead, "no such file");
    let app: AppError = read.into();
    assert_eq!(app.code().as_str(), "STORAGE_READ_ERROR");
    assert_eq!(app.status().as_u16(), 500);

    let write = DomainError::infra(InfraErrorKind::StorageWrite, "read-only fs");
    let app: AppError = write.into();
    assert_eq!(app.code().as_str(), "STORAGE_WRITE_ERROR");
    assert_eq!(app.status().as_u16(), 500);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad json");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn detail_is_preserved() {
    let app: AppError =
        DomainError::not_found(NotFoundKind::Technology, "Technology not found").into();
    assert_eq!(app.to_string(), "Not found: Technology not found");
}
