//! Fixtures shared by the unit tests.

use std::sync::Arc;

use crate::catalog::ReferenceCatalog;
use crate::model::{DocumentedItem, LocalizedText};

pub(crate) fn documented(name: &str) -> DocumentedItem {
    DocumentedItem {
        name: name.into(),
        description: LocalizedText::new(format!("{name} 要素"), format!("The {name} element")),
        specification_url: format!("https://html.spec.whatwg.org/#the-{name}-element"),
        reference_url: LocalizedText::new(
            format!("https://developer.mozilla.org/ja/docs/Web/HTML/Element/{name}"),
            format!("https://developer.mozilla.org/en-US/docs/Web/HTML/Element/{name}"),
        ),
    }
}

/// `Real = [a, b, c]`, `Decoys = [x]`.
pub(crate) fn abc_x() -> Arc<ReferenceCatalog> {
    catalog(&["a", "b", "c"], &["x"])
}

pub(crate) fn catalog(real: &[&str], decoys: &[&str]) -> Arc<ReferenceCatalog> {
    Arc::new(ReferenceCatalog::new(
        real.iter().map(|n| documented(n)).collect(),
        decoys.iter().map(|n| n.to_string()).collect(),
    ))
}
