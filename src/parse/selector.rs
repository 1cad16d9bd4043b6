use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector parsed on first use so it can live in a `static`.
#[derive(Debug)]
pub(crate) struct LazySelector {
    css: &'static str,
    parsed: OnceLock<Selector>,
}

impl LazySelector {
    pub(crate) const fn new(css: &'static str) -> Self {
        Self {
            css,
            parsed: OnceLock::new(),
        }
    }
}

impl core::ops::Deref for LazySelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.parsed.get_or_init(|| {
            Selector::parse(self.css)
                .unwrap_or_else(|e| panic!("invalid static selector `{}`: {e:?}", self.css))
        })
    }
}

#[macro_export]
macro_rules! selector {
    ($name: ident <- $css: literal) => {
        static $name: $crate::parse::selector::LazySelector =
            $crate::parse::selector::LazySelector::new($css);
    };
}
