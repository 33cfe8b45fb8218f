use regex_dsl_rs::{CharClass, Greediness, Quantified};

fn abc() -> CharClass {
    CharClass::simple(['a', 'b', 'c'])
}

#[test]
fn greedy_quantifiers_select_the_canonical_suffix() {
    assert_eq!(Quantified::new(abc(), 0, Some(1)).render(), "[abc]?");
    assert_eq!(abc().once_or_not_at_all().render(), "[abc]?");

    assert_eq!(Quantified::new(abc(), 0, None).render(), "[abc]*");
    assert_eq!(abc().zero_or_more_times().render(), "[abc]*");

    assert_eq!(Quantified::new(abc(), 1, None).render(), "[abc]+");
    assert_eq!(abc().one_or_more_times().render(), "[abc]+");

    assert_eq!(Quantified::exactly(abc(), 5).render(), "[abc]{5}");
    assert_eq!(abc().repeated_exactly(5).render(), "[abc]{5}");

    assert_eq!(Quantified::new(abc(), 5, None).render(), "[abc]{5,}");
    assert_eq!(abc().repeated_at_least(5).render(), "[abc]{5,}");

    assert_eq!(Quantified::new(abc(), 5, Some(12)).render(), "[abc]{5,12}");
    assert_eq!(abc().repeated(5, 12).render(), "[abc]{5,12}");
}

#[test]
fn reluctant_quantifiers_append_a_question_mark() {
    assert_eq!(abc().once_or_not_at_all().reluctant().render(), "[abc]??");
    assert_eq!(abc().zero_or_more_times().reluctant().render(), "[abc]*?");
    assert_eq!(abc().one_or_more_times().reluctant().render(), "[abc]+?");
    assert_eq!(abc().repeated_exactly(5).reluctant().render(), "[abc]{5}?");
    assert_eq!(abc().repeated_at_least(5).reluctant().render(), "[abc]{5,}?");
    assert_eq!(abc().repeated(5, 12).reluctant().render(), "[abc]{5,12}?");
}

#[test]
fn possessive_quantifiers_append_a_plus() {
    assert_eq!(abc().once_or_not_at_all().possessive().render(), "[abc]?+");
    assert_eq!(abc().zero_or_more_times().possessive().render(), "[abc]*+");
    assert_eq!(abc().one_or_more_times().possessive().render(), "[abc]++");
    assert_eq!(abc().repeated_exactly(5).possessive().render(), "[abc]{5}+");
    assert_eq!(
        abc().repeated_at_least(5).possessive().render(),
        "[abc]{5,}+"
    );
    assert_eq!(abc().repeated(5, 12).possessive().render(), "[abc]{5,12}+");
}

#[test]
fn exact_count_beats_the_symbolic_suffixes_only_when_bounds_differ() {
    // {0,1}, {0,} and {1,} collapse to the symbolic forms
    assert_eq!(Quantified::new(abc(), 0, Some(1)).render(), "[abc]?");
    assert_eq!(Quantified::new(abc(), 0, None).render(), "[abc]*");
    assert_eq!(Quantified::new(abc(), 1, None).render(), "[abc]+");
    // equal bounds render as a single count, including {1}
    assert_eq!(Quantified::exactly(abc(), 1).render(), "[abc]{1}");
    assert_eq!(Quantified::exactly(abc(), 0).render(), "[abc]{0}");
}

#[test]
fn quantifiers_start_greedy_and_switch_mode_by_builder() {
    assert_eq!(abc().one_or_more_times().mode(), Greediness::Greedy);
    assert_eq!(
        abc().one_or_more_times().reluctant().mode(),
        Greediness::Reluctant
    );
    assert_eq!(
        abc().one_or_more_times().possessive().mode(),
        Greediness::Possessive
    );
}

#[test]
fn quantifier_applies_to_its_child_verbatim() {
    let quantified = CharClass::simple(['a', 'b', 'c']).repeated(5, 12).reluctant();
    assert_eq!(quantified.render(), "[abc]{5,12}?");
}
