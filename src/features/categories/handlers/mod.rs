pub mod category_handler;

pub use category_handler::{
    __path_add_category, __path_delete_category, __path_list_categories, __path_preview_slug,
    __path_show_category, __path_update_category, add_category, delete_category,
    list_categories, preview_slug, show_category, update_category,
};
