//! Keyed picture state shared between host code and picture elements.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{new_error, Error, ErrorKind, Painter};

/// How a picture value is turned into drawing calls.
pub type DisplayFn<P, C> = dyn Fn(&P, &mut Painter<C>) -> Result<(), Error>;

/// A display function, boxed so it can be stored in a [`Registry`].
pub struct DisplayCallback<P, C>(Box<DisplayFn<P, C>>);

impl<P, C> DisplayCallback<P, C> {
    pub fn new(f: impl Fn(&P, &mut Painter<C>) -> Result<(), Error> + 'static) -> Self {
        DisplayCallback(Box::new(f))
    }

    pub fn call(&self, picture: &P, painter: &mut Painter<C>) -> Result<(), Error> {
        (self.0)(picture, painter)
    }
}

/// A store of arbitrary values keyed by string id.
///
/// Elements are handed a registry when they are defined rather than reaching
/// for page-global state, so separate groups of elements can be configured
/// independently. Any holder may overwrite any entry.
#[derive(Default)]
pub struct Registry {
    entries: RefCell<HashMap<String, Rc<dyn Any>>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Store `value` under `id`, replacing whatever was there.
    pub fn set_global<T: Any>(&self, value: T, id: &str) {
        self.set_shared(Rc::new(value), id);
    }

    /// Store an already shared value under `id`.
    pub fn set_shared(&self, value: Rc<dyn Any>, id: &str) {
        let replaced = self.entries.borrow_mut().insert(id.to_owned(), value);
        if replaced.is_some() {
            log::debug!("registry entry {:?} replaced", id);
        }
    }

    /// The value stored under `id`.
    ///
    /// The same `Rc` is returned every time, until the entry is overwritten.
    pub fn get_global(&self, id: &str) -> Result<Rc<dyn Any>, Error> {
        self.entries
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| new_error(ErrorKind::Unset(id.to_owned())))
    }

    /// The value stored under `id`, if it has type `T`.
    pub fn get<T: Any>(&self, id: &str) -> Result<Rc<T>, Error> {
        self.get_global(id)?
            .downcast::<T>()
            .map_err(|_| new_error(ErrorKind::WrongType(id.to_owned())))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.borrow().contains_key(id)
    }

    /// Register the function that draws pictures of type `P`.
    pub fn set_display<P: 'static, C: 'static>(
        &self,
        id: &str,
        f: impl Fn(&P, &mut Painter<C>) -> Result<(), Error> + 'static,
    ) {
        self.set_global(DisplayCallback::new(f), id);
    }

    /// The display function registered under `id`.
    pub fn display<P: 'static, C: 'static>(
        &self,
        id: &str,
    ) -> Result<Rc<DisplayCallback<P, C>>, Error> {
        self.get(id)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = self.entries.borrow();
        let mut ids: Vec<_> = entries.keys().collect();
        ids.sort();
        f.debug_struct("Registry").field("ids", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_same_value() {
        let registry = Registry::new();
        registry.set_global(String::from("state"), "k");
        let a = registry.get::<String>("k").unwrap();
        let b = registry.get::<String>("k").unwrap();
        assert_eq!(*a, "state");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn unset_key_is_reported() {
        let registry = Registry::new();
        let err = registry.get_global("missing").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Unset(id) if id == "missing"));
    }

    #[test]
    fn wrong_type_is_reported() {
        let registry = Registry::new();
        registry.set_global(7u32, "k");
        let err = registry.get::<String>("k").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::WrongType(_)));
    }

    #[test]
    fn later_set_overwrites() {
        let registry = Registry::new();
        registry.set_global(1i32, "k");
        registry.set_global(2i32, "k");
        assert_eq!(*registry.get::<i32>("k").unwrap(), 2);
    }

    #[test]
    fn shared_values_keep_identity() {
        let registry = Registry::new();
        let value: Rc<dyn Any> = Rc::new(vec![1u8, 2, 3]);
        registry.set_shared(value.clone(), "bytes");
        assert!(Rc::ptr_eq(&registry.get_global("bytes").unwrap(), &value));
    }
}
