use sea_orm::{ColumnTrait, QueryFilter};

/// Filter on a nullable owner column.
///
/// `Some(id)` matches rows owned by `id`; `None` matches only rows whose owner is `NULL`.
/// A plain `column.eq(None)` would compare with `= NULL` and match nothing.
pub trait FilterByOwner: QueryFilter + Sized {
    fn filter_owner<C: ColumnTrait>(self, column: C, owner: Option<i32>) -> Self {
        match owner {
            Some(id) => self.filter(column.eq(id)),
            None => self.filter(column.is_null()),
        }
    }
}

impl<Q: QueryFilter + Sized> FilterByOwner for Q {}
