use regex_dsl_rs::Node;
use regex_dsl_rs::node::{
    BEGINNING_OF_INPUT, BEGINNING_OF_LINE, END_OF_INPUT,
    END_OF_INPUT_BUT_FOR_THE_FINAL_TERMINATOR, END_OF_LINE, END_OF_PREVIOUS_MATCH,
    NON_WORD_BOUNDARY, WORD_BOUNDARY,
};

fn assert_renders(node: &Node, expected: &str) {
    assert_eq!(node.render(), expected);
}

#[test]
fn plain_characters_render_unchanged() {
    assert_renders(&Node::characters("abcd"), "abcd");
}

#[test]
fn characters_with_metacharacters_are_quoted() {
    assert_renders(&Node::characters("abc.d"), "\\Qabc.d\\E");
}

#[test]
fn raw_fragments_are_never_escaped() {
    assert_renders(&Node::raw("a|b|(.*)"), "a|b|(.*)");
}

#[test]
fn sequence_concatenates_children_in_order() {
    let sequence = Node::sequence([
        Node::characters("a"),
        Node::characters("bc"),
        Node::characters("d"),
    ]);
    assert_renders(&sequence, "abcd");
}

#[test]
fn either_joins_children_with_pipes_in_order() {
    let either = Node::either([
        Node::characters("a"),
        Node::characters("bc"),
        Node::characters("d"),
    ]);
    assert_renders(&either, "a|bc|d");
}

#[test]
fn groups_wrap_their_child() {
    assert_renders(&Node::group(Node::characters("abc")), "(abc)");
    assert_renders(
        &Node::named_group(Node::characters("abc"), "foo"),
        "(?<foo>abc)",
    );
    assert_renders(
        &Node::non_capturing_group(Node::characters("abc")),
        "(?:abc)",
    );
}

#[test]
fn named_group_name_is_inserted_verbatim() {
    // not validated here; the host engine rejects it at compile time
    assert_renders(
        &Node::named_group(Node::characters("x"), "not a valid name"),
        "(?<not a valid name>x)",
    );
}

#[test]
fn back_references_render_by_index_and_name() {
    assert_renders(&Node::indexed_back_reference(3), "\\3");
    assert_renders(&Node::named_back_reference("foo"), "\\k<foo>");
}

#[test]
fn boundary_matchers_render_their_fixed_notation() {
    assert_renders(&BEGINNING_OF_LINE, "^");
    assert_renders(&END_OF_LINE, "$");
    assert_renders(&WORD_BOUNDARY, "\\b");
    assert_renders(&NON_WORD_BOUNDARY, "\\B");
    assert_renders(&BEGINNING_OF_INPUT, "\\A");
    assert_renders(&END_OF_PREVIOUS_MATCH, "\\G");
    assert_renders(&END_OF_INPUT_BUT_FOR_THE_FINAL_TERMINATOR, "\\Z");
    assert_renders(&END_OF_INPUT, "\\z");
}

#[test]
fn no_implicit_grouping_of_composite_children() {
    // alternation under a quantifier is rendered as-is; grouping is the
    // caller's job
    let bare = Node::either([Node::characters("a"), Node::characters("b")]).zero_or_more_times();
    assert_eq!(bare.render(), "a|b*");

    let grouped = Node::non_capturing_group(Node::either([
        Node::characters("a"),
        Node::characters("b"),
    ]))
    .zero_or_more_times();
    assert_eq!(grouped.render(), "(?:a|b)*");
}

#[test]
fn rendering_the_same_tree_twice_is_deterministic() {
    let tree = Node::sequence([
        Node::group(Node::either([
            Node::characters("foo"),
            Node::characters("bar"),
        ])),
        Node::indexed_back_reference(1),
    ]);
    assert_eq!(tree.render(), tree.render());
    assert_eq!(tree.render(), "(foo|bar)\\1");
}
