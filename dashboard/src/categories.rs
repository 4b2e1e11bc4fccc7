use crate::api::GymApi;
use crate::notice::Notice;
use log::{error, info, warn};
use shared::dto::category::CATEGORY_NAME_REQUIRED;
use shared::{Category, CategoryForm, Result, SharedError};

/// Categories screen: an inline "add" field above the list. Every write is
/// followed by a refetch.
pub struct CategoriesScreen<A: GymApi> {
    api: A,
    categories: Vec<Category>,
    form: CategoryForm,
    deleting: Option<Category>,
}

impl<A: GymApi> CategoriesScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            categories: Vec::new(),
            form: CategoryForm::default(),
            deleting: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn name(&self) -> &str {
        &self.form.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn deleting(&self) -> Option<&Category> {
        self.deleting.as_ref()
    }

    /// A failed fetch shows an empty list.
    pub async fn load(&mut self) {
        self.categories = match self.api.list_categories().await {
            Ok(categories) => {
                info!("Loaded {} categories", categories.len());
                categories
            }
            Err(e) => {
                warn!("Failed to fetch categories: {}", e);
                Vec::new()
            }
        };
    }

    /// Creates a category from the add field, then clears it and refetches.
    pub async fn add(&mut self) -> Notice {
        let payload = match self.form.validate_and_build() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Category form rejected: {}", e);
                return Notice::error("Invalid category", CATEGORY_NAME_REQUIRED);
            }
        };

        if let Err(e) = self.api.create_category(&payload).await {
            error!("Failed to add category '{}': {}", payload.category_name, e);
            return Notice::error("Error", format!("Error adding category: {}", e));
        }

        info!("Added category '{}'", payload.category_name);
        self.form = CategoryForm::default();
        self.load().await;
        Notice::success("Created", format!("{} added.", payload.category_name))
    }

    /// Marks a category for deletion pending confirmation.
    pub fn request_delete(&mut self, id: i64) -> Result<()> {
        let category = self
            .categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| SharedError::NotFound(format!("category {}", id)))?;
        self.deleting = Some(category.clone());
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.deleting = None;
    }

    pub async fn confirm_delete(&mut self) -> Option<Notice> {
        let target = self.deleting.take()?;

        match self.api.delete_category(target.id).await {
            Ok(()) => {
                info!("Deleted category {} ({})", target.id, target.name);
                self.load().await;
                Some(Notice::success("Deleted", format!("{} deleted.", target.name)))
            }
            Err(e) => {
                error!("Failed to delete category {}: {}", target.id, e);
                self.deleting = Some(target);
                Some(Notice::error("Error", "Failed to delete category."))
            }
        }
    }
}
