use super::*;

use proptest::prelude::*;

fn rows(n: u32) -> RowLimit {
    RowLimit::Rows(NonZeroU32::new(n).unwrap())
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn encodes_fields_filters_and_limit() {
    let query = QueryDescriptor::new("core.Product")
        .with_fields(vec![
            FieldSelection::sorted("fa", SortDirection::Asc),
            FieldSelection::sorted("fd", SortDirection::Dsc),
            FieldSelection::new("fn"),
        ])
        .with_filters(vec![Filter::new("bob", "equals", "fred")])
        .with_limit(rows(1000));

    assert_eq!(
        rel_url_for_query(&query, OutputFormat::Html),
        "/query/core.Product/+fa,-fd,fn.html?bob__equals=fred&limit=1000"
    );
}

#[test]
fn empty_fields_encode_as_empty_segment() {
    let query = QueryDescriptor::new("blog.Post").with_limit(rows(25));
    assert_eq!(rel_url_for_query(&query, OutputFormat::Csv), "/query/blog.Post/.csv?limit=25");
}

#[test]
fn unlimited_query_has_no_limit_param() {
    let query = QueryDescriptor::new("blog.Post");
    assert_eq!(rel_url_for_query(&query, OutputFormat::Json), "/query/blog.Post/.json");

    let filtered = query.with_filters(vec![Filter::new("title", "contains", "rust")]);
    assert_eq!(
        rel_url_for_query(&filtered, OutputFormat::Json),
        "/query/blog.Post/.json?title__contains=rust"
    );
}

#[test]
fn filters_keep_insertion_order() {
    let query = QueryDescriptor::new("shop.Order").with_filters(vec![
        Filter::new("total", "gt", "10"),
        Filter::new("customer__name", "starts_with", "A"),
        Filter::new("total", "lt", "99"),
    ]);
    assert_eq!(
        rel_url_for_query(&query, OutputFormat::Html),
        "/query/shop.Order/.html?total__gt=10&customer__name__starts_with=A&total__lt=99"
    );
}

#[test]
fn reserved_characters_are_percent_encoded() {
    let query = QueryDescriptor::new("blog.Post")
        .with_fields(vec![FieldSelection::new("-odd,name")])
        .with_filters(vec![Filter::new("title", "equals", "a&b=c d+e")]);
    assert_eq!(
        rel_url_for_query(&query, OutputFormat::Html),
        "/query/blog.Post/%2Dodd%2Cname.html?title__equals=a%26b%3Dc%20d%2Be"
    );
}

#[test]
fn encoding_is_deterministic() {
    let query = QueryDescriptor::new("blog.Post")
        .with_filters(vec![Filter::new("a", "equal", "1"), Filter::new("b", "equal", "2")])
        .with_limit(rows(5));
    let first = rel_url_for_query(&query, OutputFormat::Html);
    for _ in 0..10 {
        assert_eq!(rel_url_for_query(&query, OutputFormat::Html), first);
    }
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decodes_backend_link() {
    let (query, format) = parse_rel_url("/query/core.Product/admin.html?name__contains=sql&limit=1000").unwrap();
    assert_eq!(format, OutputFormat::Html);
    assert_eq!(query.model, "core.Product");
    assert_eq!(query.fields, vec![FieldSelection::new("admin")]);
    assert_eq!(query.filters, vec![Filter::new("name", "contains", "sql")]);
    assert_eq!(query.limit, rows(1000));
}

#[test]
fn decodes_related_filter_path() {
    let (query, _) = parse_rel_url("/query/app.model/+fa,-fd,fn.html?bob__jones__equals=fred").unwrap();
    assert_eq!(query.filters, vec![Filter::new("bob__jones", "equals", "fred")]);
    assert_eq!(query.limit, RowLimit::Unlimited);
}

#[test]
fn decodes_plus_as_space_in_query_string() {
    let (query, _) = parse_rel_url("/query/blog.Post/.html?title__equals=hello+world").unwrap();
    assert_eq!(query.filters[0].value, "hello world");
}

#[test]
fn decoding_accepts_missing_leading_slash() {
    let (query, format) = parse_rel_url("query/blog.Post/.csv").unwrap();
    assert_eq!(query, QueryDescriptor::new("blog.Post"));
    assert_eq!(format, OutputFormat::Csv);
}

#[test]
fn rejects_non_query_paths() {
    assert_eq!(
        parse_rel_url("/views/42.html"),
        Err(QueryParseError::NotAQueryUrl("/views/42.html".to_owned()))
    );
}

#[test]
fn rejects_missing_model() {
    assert_eq!(parse_rel_url("/query//.html"), Err(QueryParseError::MissingModel));
}

#[test]
fn rejects_missing_or_unknown_format() {
    assert!(matches!(parse_rel_url("/query/blog.Post"), Err(QueryParseError::MissingFormat(_))));
    assert!(matches!(parse_rel_url("/query/blog.Post/fields"), Err(QueryParseError::MissingFormat(_))));
    assert_eq!(
        parse_rel_url("/query/blog.Post/.xlsx"),
        Err(QueryParseError::UnknownFormat("xlsx".to_owned()))
    );
}

#[test]
fn rejects_bad_limits() {
    assert_eq!(
        parse_rel_url("/query/blog.Post/.html?limit=0"),
        Err(QueryParseError::InvalidLimit("0".to_owned()))
    );
    assert_eq!(
        parse_rel_url("/query/blog.Post/.html?limit=lots"),
        Err(QueryParseError::InvalidLimit("lots".to_owned()))
    );
    assert_eq!(
        parse_rel_url("/query/blog.Post/.html?limit=1&limit=2"),
        Err(QueryParseError::DuplicateLimit)
    );
}

#[test]
fn rejects_filter_without_lookup() {
    assert_eq!(
        parse_rel_url("/query/blog.Post/.html?title=x"),
        Err(QueryParseError::MissingLookup("title".to_owned()))
    );
}

#[test]
fn output_format_parses_known_names() {
    for format in OutputFormat::ALL {
        assert_eq!(format.as_str().parse::<OutputFormat>(), Ok(format));
    }
    assert_eq!(OutputFormat::default(), OutputFormat::Html);
}

#[test]
fn default_link_for_published_posts() {
    let query = QueryDescriptor::new("blog.Post")
        .with_filters(vec![Filter::new("published", "equal", "true")])
        .with_limit(rows(25));
    let url = rel_url_for_query(&query, OutputFormat::Html);
    let (decoded, format) = parse_rel_url(&url).unwrap();

    assert_eq!(format, OutputFormat::Html);
    assert_eq!(decoded.model, "blog.Post");
    assert!(decoded.fields.is_empty());
    assert_eq!(decoded.filters, vec![Filter::new("published", "equal", "true")]);
    assert_eq!(decoded.limit, rows(25));
}

// =============================================================
// Round trip
// =============================================================

fn model_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,8}\\.[A-Z][A-Za-z0-9]{0,10}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..4).prop_map(|parts| parts.join("__"))
}

fn field_strategy() -> impl Strategy<Value = FieldSelection> {
    let sort = prop_oneof![Just(None), Just(Some(SortDirection::Asc)), Just(Some(SortDirection::Dsc))];
    ("[-a-z][a-z0-9_.]{0,10}", sort).prop_map(|(path, sort)| FieldSelection { path, sort })
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    (path_strategy(), "[a-z]{1,6}(_[a-z]{1,6}){0,2}", "\\PC{0,16}")
        .prop_map(|(path, lookup, value)| Filter { path, lookup, value })
}

fn limit_strategy() -> impl Strategy<Value = RowLimit> {
    prop_oneof![Just(RowLimit::Unlimited), (1u32..=u32::MAX).prop_map(rows)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(OutputFormat::ALL.to_vec())
}

proptest! {
    #[test]
    fn decode_inverts_encode(
        model in model_strategy(),
        fields in prop::collection::vec(field_strategy(), 0..5),
        filters in prop::collection::vec(filter_strategy(), 0..5),
        limit in limit_strategy(),
        format in format_strategy(),
    ) {
        let query = QueryDescriptor { model, fields, filters, limit };
        let url = rel_url_for_query(&query, format);
        prop_assert_eq!(parse_rel_url(&url), Ok((query, format)));
    }
}
