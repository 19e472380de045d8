use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{LikeExpr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};

use crate::{
    catalog::like_pattern,
    entity::{favorite, product},
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// SQLite-backed [`ProductRepository`]
#[derive(Clone)]
pub struct SqliteProductRepository {
    db: DatabaseConnection,
}

impl SqliteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Classify a failed favorite insert.
    ///
    /// SQLite does not say which foreign key failed, so the product is looked
    /// up again: a missing product was deleted concurrently, otherwise the
    /// account does not exist.
    async fn link_error(&self, err: DbErr, user_id: i32, product_id: i32) -> ProductError {
        if !matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
            return ProductError::Database(err);
        }

        match product::Entity::find_by_id(product_id).one(&self.db).await {
            Ok(Some(_)) => ProductError::UnknownUser(user_id),
            Ok(None) => ProductError::NotFound(product_id),
            Err(lookup) => ProductError::Database(lookup),
        }
    }
}

/// `title LIKE %term% OR description LIKE %term%`, or no filter
fn search_condition(search: Option<String>) -> Condition {
    let Some(term) = search else {
        return Condition::all();
    };

    let pattern = like_pattern(&term);
    Condition::any()
        .add(product::Column::Title.like(LikeExpr::new(pattern.clone()).escape('\\')))
        .add(product::Column::Description.like(LikeExpr::new(pattern).escape('\\')))
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let image = input.normalized_image();
        let active_model = product::ActiveModel {
            title: Set(input.title),
            price: Set(input.price),
            description: Set(input.description),
            image: Set(image),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn replace(&self, id: i32, input: ProductInput) -> ProductResult<Option<Product>> {
        let Some(model) = product::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let image = input.normalized_image();
        let mut active_model: product::ActiveModel = model.into();
        active_model.title = Set(input.title);
        active_model.price = Set(input.price);
        active_model.description = Set(input.description);
        active_model.image = Set(image);

        match active_model.update(&self.db).await {
            Ok(updated) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(Some(updated.into()))
            }
            // Deleted between the read and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let txn = self.db.begin().await?;

        let links = favorite::Entity::delete_many()
            .filter(favorite::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;
        let result = product::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        if result.rows_affected > 0 {
            tracing::info!(
                product_id = id,
                favorites_removed = links.rows_affected,
                "Deleted product"
            );
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self, search: Option<String>) -> ProductResult<u64> {
        let total = product::Entity::find()
            .filter(search_condition(search))
            .count(&self.db)
            .await?;

        Ok(total)
    }

    async fn list_page(
        &self,
        search: Option<String>,
        limit: u64,
        offset: u64,
    ) -> ProductResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(search_condition(search))
            .order_by_desc(product::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn favorite_product_ids(
        &self,
        user_id: i32,
        product_ids: Vec<i32>,
    ) -> ProductResult<Vec<i32>> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = favorite::Entity::find()
            .select_only()
            .column(favorite::Column::ProductId)
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ProductId.is_in(product_ids))
            .into_tuple::<i32>()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    async fn add_favorite(&self, user_id: i32, product_id: i32) -> ProductResult<bool> {
        let link = favorite::ActiveModel {
            user_id: Set(user_id),
            product_id: Set(product_id),
            ..Default::default()
        };

        let inserted = favorite::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([favorite::Column::UserId, favorite::Column::ProductId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;

        match inserted {
            Ok(rows) => Ok(rows > 0),
            Err(err) => Err(self.link_error(err, user_id, product_id).await),
        }
    }

    async fn remove_favorite(&self, user_id: i32, product_id: i32) -> ProductResult<bool> {
        let result = favorite::Entity::delete_many()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ProductId.eq(product_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
