use crate::database::{map_query_error, model::catalog::VenueRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    catalog::Venue,
    id::{ClubId, VenueId},
};
use kernel::repository::catalog::CatalogRepository;
use shared::error::AppResult;

#[derive(new)]
pub struct CatalogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn resolve_venue(&self, venue_name: &str) -> AppResult<Option<VenueId>> {
        sqlx::query_scalar::<_, VenueId>(
            "SELECT venue_id FROM venue_list WHERE venue_name = $1",
        )
        .bind(venue_name)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(map_query_error)
    }

    async fn resolve_club(&self, club_name: &str) -> AppResult<Option<ClubId>> {
        sqlx::query_scalar::<_, ClubId>("SELECT club_id FROM club_list WHERE club_name = $1")
            .bind(club_name)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(map_query_error)
    }

    async fn club_for_principal(&self, email: &str) -> AppResult<Option<ClubId>> {
        // Head emails are stored lowercase; normalize the input the same way.
        sqlx::query_scalar::<_, ClubId>("SELECT club_id FROM club_head WHERE head_email = $1")
            .bind(email.to_lowercase())
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(map_query_error)
    }

    async fn find_all_venues(&self) -> AppResult<Vec<Venue>> {
        sqlx::query_as::<_, VenueRow>(
            "SELECT venue_id, venue_name FROM venue_list ORDER BY venue_id ASC",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Venue::from).collect())
        .map_err(map_query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[sqlx::test(fixtures("catalog"))]
    async fn names_resolve_to_stable_ids(pool: PgPool) -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::new(ConnectionPool::new(pool));

        assert_eq!(repo.resolve_venue("G - 301").await?, Some(VenueId::new(1)));
        assert_eq!(repo.resolve_venue("H - 999").await?, None);
        assert_eq!(
            repo.resolve_club("Cyber Security Club").await?,
            Some(ClubId::new(2))
        );
        assert_eq!(repo.resolve_club("Chess Club").await?, None);
        Ok(())
    }

    #[sqlx::test(fixtures("catalog"))]
    async fn principal_binding_is_case_insensitive(pool: PgPool) -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::new(ConnectionPool::new(pool));

        assert_eq!(
            repo.club_for_principal("emma.wilson@psgtech.ac.in").await?,
            Some(ClubId::new(1))
        );
        assert_eq!(
            repo.club_for_principal("Emma.Wilson@psgtech.ac.in").await?,
            Some(ClubId::new(1))
        );
        assert_eq!(repo.club_for_principal("nobody@psgtech.ac.in").await?, None);
        Ok(())
    }

    #[sqlx::test(fixtures("catalog"))]
    async fn venue_catalog_lists_in_id_order(pool: PgPool) -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::new(ConnectionPool::new(pool));

        let venues = repo.find_all_venues().await?;
        assert_eq!(venues.len(), 3);
        assert_eq!(venues[0].venue_name, "G - 301");
        assert_eq!(venues[2].venue_name, "D - Block Ground Floor");
        Ok(())
    }
}
