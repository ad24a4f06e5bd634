/// The dynamic list of URL input fields
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct UrlField {
    pub id: Uuid,
    pub value: String,
}

impl UrlField {
    fn empty() -> UrlField {
        UrlField {
            id: Uuid::new_v4(),
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoveError {
    /// The list never drops below one field
    LastField,
    UnknownField,
}

/// Ordered URL fields; always holds at least one
#[derive(Debug, Clone, PartialEq)]
pub struct UrlFieldList {
    fields: Vec<UrlField>,
}

impl UrlFieldList {
    pub fn new() -> Self {
        UrlFieldList {
            fields: vec![UrlField::empty()],
        }
    }

    pub fn fields(&self) -> &[UrlField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn add(&mut self) -> Uuid {
        let field = UrlField::empty();
        let id = field.id;
        self.fields.push(field);
        id
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), RemoveError> {
        if self.fields.len() <= 1 {
            return Err(RemoveError::LastField);
        }

        let original_len = self.fields.len();
        self.fields.retain(|f| f.id != id);

        if self.fields.len() < original_len {
            Ok(())
        } else {
            Err(RemoveError::UnknownField)
        }
    }

    pub fn set_value(&mut self, id: Uuid, value: String) -> bool {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .map(|field| {
                field.value = value;
            })
            .is_some()
    }

    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Back to a single blank field
    pub fn reset(&mut self) {
        self.fields.truncate(1);
        if let Some(first) = self.fields.first_mut() {
            first.value.clear();
        }
    }
}

impl Default for UrlFieldList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_empty_field() {
        let list = UrlFieldList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.values(), vec![String::new()]);
    }

    #[test]
    fn test_add_appends_unique_fields() {
        let mut list = UrlFieldList::new();
        let a = list.add();
        let b = list.add();

        assert_eq!(list.len(), 3);
        assert_ne!(a, b);
        assert_eq!(list.fields()[2].id, b);
    }

    #[test]
    fn test_cannot_remove_last_field() {
        let mut list = UrlFieldList::new();
        let only = list.fields()[0].id;

        assert_eq!(list.remove(only), Err(RemoveError::LastField));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_field() {
        let mut list = UrlFieldList::new();
        let first = list.fields()[0].id;
        let second = list.add();
        list.set_value(second, "https://youtu.be/b".to_string());

        assert_eq!(list.remove(first), Ok(()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.values(), vec!["https://youtu.be/b".to_string()]);
    }

    #[test]
    fn test_remove_unknown_field() {
        let mut list = UrlFieldList::new();
        list.add();

        assert_eq!(list.remove(Uuid::new_v4()), Err(RemoveError::UnknownField));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_value() {
        let mut list = UrlFieldList::new();
        let id = list.fields()[0].id;

        assert!(list.set_value(id, "https://youtu.be/a".to_string()));
        assert!(!list.set_value(Uuid::new_v4(), "x".to_string()));
        assert_eq!(list.values(), vec!["https://youtu.be/a".to_string()]);
    }

    #[test]
    fn test_reset() {
        let mut list = UrlFieldList::new();
        let first = list.fields()[0].id;
        list.set_value(first, "https://youtu.be/a".to_string());
        list.add();
        list.add();

        list.reset();

        assert_eq!(list.len(), 1);
        assert_eq!(list.fields()[0].id, first);
        assert_eq!(list.values(), vec![String::new()]);
    }
}
