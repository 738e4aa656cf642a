use kernel::model::id::ClubId;
use kernel::repository::catalog::CatalogRepository;
use shared::error::{AppError, AppResult};

/// Gate for every mutating operation: the claimed club name must resolve,
/// and the principal's club-head binding must match it. The binding is
/// re-derived from the store on each call rather than cached, so an
/// administrative reassignment takes effect on the next request.
pub async fn bind_club(
    catalog: &dyn CatalogRepository,
    email: &str,
    claimed_club_name: &str,
) -> AppResult<ClubId> {
    let claimed = catalog
        .resolve_club(claimed_club_name)
        .await?
        .ok_or_else(|| AppError::UnknownClub(claimed_club_name.to_string()))?;

    match catalog.club_for_principal(email).await? {
        Some(bound) if bound == claimed => Ok(bound),
        _ => Err(AppError::Forbidden(format!(
            "{email} may not act on behalf of {claimed_club_name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kernel::model::{catalog::Venue, id::VenueId};

    struct StubCatalog;

    #[async_trait]
    impl CatalogRepository for StubCatalog {
        async fn resolve_venue(&self, _venue_name: &str) -> AppResult<Option<VenueId>> {
            Ok(None)
        }

        async fn resolve_club(&self, club_name: &str) -> AppResult<Option<ClubId>> {
            Ok(match club_name {
                "Artificial Intelligence & Robotics" => Some(ClubId::new(1)),
                "Cyber Security Club" => Some(ClubId::new(2)),
                _ => None,
            })
        }

        async fn club_for_principal(&self, email: &str) -> AppResult<Option<ClubId>> {
            Ok(match email {
                "emma.wilson@psgtech.ac.in" => Some(ClubId::new(1)),
                _ => None,
            })
        }

        async fn find_all_venues(&self) -> AppResult<Vec<Venue>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn matching_binding_yields_the_club_id() {
        let club_id = bind_club(
            &StubCatalog,
            "emma.wilson@psgtech.ac.in",
            "Artificial Intelligence & Robotics",
        )
        .await
        .unwrap();
        assert_eq!(club_id, ClubId::new(1));
    }

    #[tokio::test]
    async fn unknown_claimed_club_is_rejected() {
        let err = bind_club(&StubCatalog, "emma.wilson@psgtech.ac.in", "Chess Club")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownClub(_)));
    }

    #[tokio::test]
    async fn claiming_another_clubs_name_is_forbidden() {
        let err = bind_club(
            &StubCatalog,
            "emma.wilson@psgtech.ac.in",
            "Cyber Security Club",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn unbound_principal_is_forbidden() {
        let err = bind_club(
            &StubCatalog,
            "nobody@psgtech.ac.in",
            "Artificial Intelligence & Robotics",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
