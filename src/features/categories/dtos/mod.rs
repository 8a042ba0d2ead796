mod category_dto;

pub use category_dto::{
    CategoryPayloadDto, CategoryResponseDto, SlugPreviewDto, SlugifyQuery,
};
