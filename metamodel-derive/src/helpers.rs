//! Helpers for parsing `#[name(key, key = value)]` style attributes.

use syn::{meta::ParseNestedMeta, parse::Parse, Attribute, Expr, Token};

/// Parser for the arguments of attributes with a given name.
pub struct AttrParser {
    name: &'static str,
}

impl AttrParser {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Check that every argument of this parser's attributes in `attrs` is one of `allowed`.
    pub fn check(&self, attrs: &[Attribute], allowed: &[&str]) {
        self.visit(attrs, |key, meta| {
            if !allowed.contains(&key) {
                return Err(meta.error(format!(
                    "unknown argument `{key}`; expected one of {}",
                    allowed.join(", ")
                )));
            }
            skip_value(&meta)
        });
    }

    /// Is the flag `key` set, as in `#[name(key)]`?
    pub fn has_bool(&self, attrs: &[Attribute], key: &str) -> bool {
        let mut found = false;
        self.visit(attrs, |k, meta| {
            if k == key {
                found = true;
            }
            skip_value(&meta)
        });
        found
    }

    /// Get the value of the argument `key`, as in `#[name(key = value)]`.
    pub fn get_arg<T: Parse>(&self, attrs: &[Attribute], key: &str) -> Option<T> {
        let mut found = None;
        self.visit(attrs, |k, meta| {
            if k == key {
                found = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                skip_value(&meta)
            }
        });
        found
    }

    fn visit(
        &self,
        attrs: &[Attribute],
        mut f: impl FnMut(&str, ParseNestedMeta) -> syn::Result<()>,
    ) {
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(self.name)) {
            let res = attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(|ident| ident.to_string())
                    .unwrap_or_default();
                f(&key, meta)
            });
            if let Err(err) = res {
                panic!("malformed #[{}] attribute: {err}", self.name);
            }
        }
    }
}

// Arguments we are not interested in still have to be consumed, or the nested meta parser will
// fail on the next `,`.
fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    }
    Ok(())
}
