//! The `Style` type and its combinators.

use std::fmt;
use std::iter::Sum;
use std::sync::Arc;

use super::arg::{Resolver, StyleArg};
use super::error::StyleError;
use super::merge::Merge;
use super::props::Props;

/// A lazily-evaluated transformation from props to a result.
///
/// A `Style` wraps a single resolver function `&P -> A`. Nothing runs until
/// [`resolve`](Style::resolve) is called; every combinator returns a new
/// `Style` that shares its operands through reference counting and never
/// mutates them. Cloning is cheap.
///
/// `Style` is a functor ([`map`](Style::map)), a monad over the shared
/// environment ([`of`](Style::of), [`chain`](Style::chain),
/// [`ap`](Style::ap)) and, when `A` implements [`Merge`], a monoid
/// ([`concat`](Style::concat), [`empty`](Style::empty)).
///
/// # Example
///
/// ```rust
/// use further::{props, Css, Props, Style};
/// use serde_json::{json, Value};
///
/// let button = Style::new(|p: &Props| {
///     let bg = if p.get("primary") == Some(&Value::Bool(true)) { "green" } else { "blue" };
///     props(json!({ "backgroundColor": bg, "color": "white" }))
/// });
/// let shadow = Style::of(props(json!({ "boxShadow": "0 2px 3px black" })));
///
/// let styled = button.concat(&shadow);
/// let css: Css = styled.resolve(&props(json!({ "primary": true })));
/// assert_eq!(css["backgroundColor"], json!("green"));
/// assert_eq!(css["boxShadow"], json!("0 2px 3px black"));
/// ```
pub struct Style<A, P = Props> {
    resolver: Resolver<A, P>,
}

impl<A: 'static, P: 'static> Style<A, P> {
    /// Creates a style from a resolver function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) -> A + Send + Sync + 'static,
    {
        Self {
            resolver: Arc::new(f),
        }
    }

    /// Creates a style from an argument that may not be a function.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAFunction`] when `arg` is a plain value.
    pub fn try_new(arg: StyleArg<A, P>) -> Result<Self, StyleError> {
        let resolver = arg.into_function("Style")?;
        Ok(Self { resolver })
    }

    /// Creates a style that ignores its props and always resolves to `a`.
    pub fn of(a: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_: &P| a.clone())
    }

    /// Instance form of [`Style::of`]: a constant style over the same props type.
    ///
    /// The receiver is not consulted.
    pub fn lift<B>(&self, b: B) -> Style<B, P>
    where
        B: Clone + Send + Sync + 'static,
    {
        Style::of(b)
    }

    /// Resolves the style against `props`.
    pub fn resolve(&self, props: &P) -> A {
        (self.resolver)(props)
    }

    /// Resolves the style against empty props.
    ///
    /// The empty props come from [`Merge::empty`], so a `Value` environment
    /// sees `{}` rather than `null`.
    pub fn resolve_default(&self) -> A
    where
        P: Merge,
    {
        self.resolve(&P::empty())
    }

    /// Returns the raw resolver function.
    pub fn resolver(&self) -> &(dyn Fn(&P) -> A + Send + Sync) {
        &*self.resolver
    }

    /// Transforms the resolved value with `f`.
    pub fn map<B, F>(&self, f: F) -> Style<B, P>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let this = self.clone();
        Style::new(move |props: &P| f(this.resolve(props)))
    }

    /// Alias for [`map`](Style::map), used to derive styles from resolved values.
    pub fn class<B, F>(&self, f: F) -> Style<B, P>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map(f)
    }

    /// Feeds the resolved value to `f` and resolves the returned style
    /// against the same props.
    pub fn chain<B, F>(&self, f: F) -> Style<B, P>
    where
        B: 'static,
        F: Fn(A) -> Style<B, P> + Send + Sync + 'static,
    {
        let this = self.clone();
        Style::new(move |props: &P| f(this.resolve(props)).resolve(props))
    }

    /// Applies the function resolved by `fs` to the value resolved by `self`.
    ///
    /// Both styles see the same props: `fs` is resolved first and the
    /// receiver is then mapped through the function it produced.
    pub fn ap<B, F>(&self, fs: &Style<F, P>) -> Style<B, P>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let this = self.clone();
        fs.chain(move |f| this.map(f))
    }

    /// Alias for [`ap`](Style::ap).
    pub fn apply<B, F>(&self, fs: &Style<F, P>) -> Style<B, P>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.ap(fs)
    }

    /// Resolves the receiver against `f(props)` instead of `props`.
    ///
    /// This rewrites the environment for everything downstream of the
    /// receiver, which `map` and `chain` cannot do. The new environment may
    /// even have a different type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use further::{props, Props, Style};
    /// use serde_json::json;
    ///
    /// let st = Style::new(|p: &Props| props(json!({
    ///     "color": "blue",
    ///     "backgroundColor": p.get("bg").cloned(),
    /// })));
    /// let orange = st.set_args(|_: &Props| props(json!({ "bg": "orange" })));
    ///
    /// let css = orange.resolve(&props(json!({ "bg": "black" })));
    /// assert_eq!(css["backgroundColor"], json!("orange"));
    /// ```
    pub fn set_args<Q, F>(&self, f: F) -> Style<A, Q>
    where
        Q: 'static,
        F: Fn(&Q) -> P + Send + Sync + 'static,
    {
        let this = self.clone();
        Style::new(move |props: &Q| this.resolve(&f(props)))
    }

    /// Checked form of [`set_args`](Style::set_args).
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAFunction`] when `arg` is a plain value.
    pub fn try_set_args<Q: 'static>(
        &self,
        arg: StyleArg<P, Q>,
    ) -> Result<Style<A, Q>, StyleError> {
        let f = arg.into_function("setArgs")?;
        Ok(self.set_args(move |props: &Q| f(props)))
    }
}

impl<A: Merge + 'static, P: 'static> Style<A, P> {
    /// Resolves both styles against the same props and merges the results,
    /// `other` winning on collisions.
    pub fn concat(&self, other: &Style<A, P>) -> Self {
        let left = self.clone();
        let right = other.clone();
        Style::new(move |props: &P| left.resolve(props).merge(right.resolve(props)))
    }

    /// Alias for [`concat`](Style::concat), used to append a style.
    pub fn add(&self, other: &Style<A, P>) -> Self {
        self.concat(other)
    }

    /// Concatenates `styles` onto the receiver, left to right.
    pub fn concat_all<I>(&self, styles: I) -> Self
    where
        I: IntoIterator<Item = Style<A, P>>,
    {
        styles
            .into_iter()
            .fold(self.clone(), |acc, style| acc.concat(&style))
    }
}

impl<A, P> Style<A, P>
where
    A: Merge + Clone + Send + Sync + 'static,
    P: 'static,
{
    /// The identity for [`concat`](Style::concat): resolves to [`Merge::empty`].
    pub fn empty() -> Self {
        Self::of(A::empty())
    }

    /// Instance form of [`Style::empty`].
    pub fn empty_like(&self) -> Self {
        Self::empty()
    }

    /// Concatenates `styles` in order, starting from [`Style::empty`].
    pub fn from_styles<I>(styles: I) -> Self
    where
        I: IntoIterator<Item = Style<A, P>>,
    {
        Self::empty().concat_all(styles)
    }
}

impl<A, P> Clone for Style<A, P> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<A, P> fmt::Debug for Style<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("props", &std::any::type_name::<P>())
            .field("output", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

impl<A, P> Default for Style<A, P>
where
    A: Merge + Clone + Send + Sync + 'static,
    P: 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, P> FromIterator<Style<A, P>> for Style<A, P>
where
    A: Merge + Clone + Send + Sync + 'static,
    P: 'static,
{
    fn from_iter<I: IntoIterator<Item = Style<A, P>>>(iter: I) -> Self {
        Self::from_styles(iter)
    }
}

impl<A, P> Sum for Style<A, P>
where
    A: Merge + Clone + Send + Sync + 'static,
    P: 'static,
{
    fn sum<I: Iterator<Item = Style<A, P>>>(iter: I) -> Self {
        Self::from_styles(iter)
    }
}

impl<A: Merge + 'static, P: 'static> std::ops::Add for Style<A, P> {
    type Output = Style<A, P>;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(&rhs)
    }
}

impl<'a, A: Merge + 'static, P: 'static> std::ops::Add<&'a Style<A, P>> for &'a Style<A, P> {
    type Output = Style<A, P>;

    fn add(self, rhs: &'a Style<A, P>) -> Self::Output {
        self.concat(rhs)
    }
}
