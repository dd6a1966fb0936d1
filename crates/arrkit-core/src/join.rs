//! Joining elements into a delimited string.
//!
//! A [`Joiner`] holds the presentation style: prefix, separator, suffix,
//! an optional item limit with a remainder marker, and whether to append
//! the element count. Elements are supplied by index or from an iterator.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write;

/// String form of an absent array or element.
pub const NULL: &str = "null";

/// When a [`Joiner`] appends the total element count after the suffix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShowCount {
    /// Never append the count.
    Never,
    /// Always append the count.
    Always,
    /// Append the count only when items were cut off by the limit.
    #[default]
    Truncated,
}

/// Presentation style for joined elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Joiner {
    prefix: Cow<'static, str>,
    separator: Cow<'static, str>,
    suffix: Cow<'static, str>,
    max: Option<usize>,
    remainder: Cow<'static, str>,
    show_count: ShowCount,
    count_prefix: Cow<'static, str>,
    count_suffix: Cow<'static, str>,
}

impl Joiner {
    /// Default remainder marker shown in place of cut-off items.
    pub const DEFAULT_REMAINDER: &'static str = "...";

    /// No delimiters at all.
    pub const NONE: Self = Self::of("", "", "");
    /// `[a, b]`
    pub const ARRAY: Self = Self::of("[", ", ", "]");
    /// `[a,b]`
    pub const ARRAY_COMPACT: Self = Self::of("[", ",", "]");
    /// `{a, b}`
    pub const LIST: Self = Self::of("{", ", ", "}");
    /// `{a,b}`
    pub const LIST_COMPACT: Self = Self::of("{", ",", "}");
    /// `(a, b)`
    pub const PARAM: Self = Self::of("(", ", ", ")");
    /// `(a,b)`
    pub const PARAM_COMPACT: Self = Self::of("(", ",", ")");
    /// `a,b`
    pub const COMMA: Self = Self::of("", ",", "");
    /// `a|b`
    pub const OR: Self = Self::of("", "|", "");
    /// `a:b`
    pub const COLON: Self = Self::of("", ":", "");

    /// An unlimited joiner with the given delimiters.
    pub const fn of(prefix: &'static str, separator: &'static str, suffix: &'static str) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
            separator: Cow::Borrowed(separator),
            suffix: Cow::Borrowed(suffix),
            max: None,
            remainder: Cow::Borrowed(Self::DEFAULT_REMAINDER),
            show_count: ShowCount::Truncated,
            count_prefix: Cow::Borrowed("("),
            count_suffix: Cow::Borrowed(")"),
        }
    }

    /// Start building a joiner from [`Joiner::NONE`].
    pub fn builder() -> JoinerBuilder {
        JoinerBuilder(Self::NONE)
    }

    /// Start building a joiner from a copy of this one.
    pub fn edit(&self) -> JoinerBuilder {
        JoinerBuilder(self.clone())
    }

    /// The item limit, if any.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Join `count` items, each appended to the output by `f(out, index)`.
    pub fn join_index(&self, count: usize, f: impl FnMut(&mut String, usize)) -> String {
        let mut out = String::new();
        self.append_index(&mut out, count, f);
        out
    }

    /// Append `count` items to `out`, each written by `f(out, index)`.
    pub fn append_index(
        &self,
        out: &mut String,
        count: usize,
        mut f: impl FnMut(&mut String, usize),
    ) {
        out.push_str(&self.prefix);
        let shown = self.max.map_or(count, |max| count.min(max));
        for i in 0..shown {
            if i > 0 {
                out.push_str(&self.separator);
            }
            if self.is_cut(i, count) {
                out.push_str(&self.remainder);
                break;
            }
            f(out, i);
        }
        out.push_str(&self.suffix);
        self.append_count(out, count);
    }

    /// Join every displayable value of `values`.
    pub fn join_all<T: fmt::Display>(&self, values: &[T]) -> String {
        self.join_index(values.len(), |out, i| {
            let _ = write!(out, "{}", values[i]);
        })
    }

    /// Join the displayable items of an iterator. The iterator is drained
    /// so the count is exact even when items are cut off.
    pub fn join<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let items: Vec<I::Item> = items.into_iter().collect();
        self.join_all(&items)
    }

    fn is_cut(&self, index: usize, count: usize) -> bool {
        self.max.is_some_and(|max| index + 1 == max && count > max)
    }

    fn append_count(&self, out: &mut String, count: usize) {
        let truncated = self.max.is_some_and(|max| count > max);
        let show = match self.show_count {
            ShowCount::Never => false,
            ShowCount::Always => true,
            ShowCount::Truncated => truncated,
        };
        if show {
            let _ = write!(out, "{}{count}{}", self.count_prefix, self.count_suffix);
        }
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::ARRAY
    }
}

/// Builder for a customised [`Joiner`].
#[derive(Clone, Debug)]
pub struct JoinerBuilder(Joiner);

impl JoinerBuilder {
    /// Text written before the first item.
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.0.prefix = prefix.into();
        self
    }

    /// Text written between items.
    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.0.separator = separator.into();
        self
    }

    /// Text written after the last item.
    pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.0.suffix = suffix.into();
        self
    }

    /// Limit on the number of item slots.
    pub fn max(mut self, max: usize) -> Self {
        self.0.max = Some(max);
        self
    }

    /// Remove any item limit.
    pub fn unlimited(mut self) -> Self {
        self.0.max = None;
        self
    }

    /// Marker written in the last slot when items are cut off.
    pub fn remainder(mut self, remainder: impl Into<Cow<'static, str>>) -> Self {
        self.0.remainder = remainder.into();
        self
    }

    /// When to append the element count.
    pub fn show_count(mut self, show_count: ShowCount) -> Self {
        self.0.show_count = show_count;
        self
    }

    /// Text surrounding the appended element count.
    pub fn count_format(
        mut self,
        prefix: impl Into<Cow<'static, str>>,
        suffix: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.0.count_prefix = prefix.into();
        self.0.count_suffix = suffix.into();
        self
    }

    /// Finish building.
    pub fn build(self) -> Joiner {
        self.0
    }
}
