/// Builds a [`Matcher`](crate::Matcher) from a literal route table.
///
/// ```
/// use pattern_router::matcher;
///
/// let m = matcher! {
///     "/" => "home",
///     "/users/:id" => "user",
/// };
/// assert_eq!(*m.find("/users/1").unwrap().page, "user");
/// ```
#[macro_export]
macro_rules! matcher {
    {$($pattern:expr => $page:expr),+ $(,)?} => {{
        let mut __matcher = $crate::Matcher::new();
        $(__matcher.insert($pattern, $page);)+
        __matcher
    }};
}
