use super::*;

// -----------------------------------------------------------------------
// to_lines
// -----------------------------------------------------------------------

#[test]
fn to_lines_trims_and_drops_blank_lines() {
    let raw = "  jane.doe  \n\n\t@jane_doe\r\n   \n120 posts\n";
    assert_eq!(to_lines(raw), vec!["jane.doe", "@jane_doe", "120 posts"]);
}

#[test]
fn to_lines_empty_input() {
    assert!(to_lines("").is_empty());
    assert!(to_lines("\n \n\t\n").is_empty());
}

// -----------------------------------------------------------------------
// counts
// -----------------------------------------------------------------------

#[test]
fn empty_input_leaves_every_field_unset() {
    let result = extract_profile(Vec::<&str>::new());
    assert_eq!(result, ExtractionResult::default());
}

#[test]
fn followers_strips_comma_separators() {
    let result = extract_profile(["12,345 followers"]);
    assert_eq!(result.followers, Some(12_345));
}

#[test]
fn following_strips_period_separators() {
    let result = extract_profile(["1.234 following"]);
    assert_eq!(result.following, Some(1_234));
}

#[test]
fn decimal_looking_count_collapses_to_integer() {
    let result = extract_profile(["1.2 followers"]);
    assert_eq!(result.followers, Some(12));
}

#[test]
fn counts_are_case_insensitive() {
    let result = extract_profile(["532 Posts", "1,024 FOLLOWERS", "88 Following"]);
    assert_eq!(result.posts, Some(532));
    assert_eq!(result.followers, Some(1_024));
    assert_eq!(result.following, Some(88));
}

#[test]
fn counts_allow_no_space_before_label() {
    let result = extract_profile(["250followers"]);
    assert_eq!(result.followers, Some(250));
}

#[test]
fn single_line_can_hold_all_three_counts() {
    let result = extract_profile(["48 posts 2,310 followers 190 following"]);
    assert_eq!(result.posts, Some(48));
    assert_eq!(result.followers, Some(2_310));
    assert_eq!(result.following, Some(190));
}

#[test]
fn singular_post_matches_when_line_mentions_posts() {
    let result = extract_profile(["1 post | see all posts"]);
    assert_eq!(result.posts, Some(1));
}

#[test]
fn singular_post_alone_is_not_gated_in() {
    let result = extract_profile(["1 post"]);
    assert_eq!(result.posts, None);
}

#[test]
fn label_without_digits_leaves_field_unset() {
    let result = extract_profile(["followers", "Following"]);
    assert_eq!(result.followers, None);
    assert_eq!(result.following, None);
}

#[test]
fn label_without_digits_keeps_earlier_value() {
    let result = extract_profile(["900 followers", "no followers here"]);
    assert_eq!(result.followers, Some(900));
}

#[test]
fn later_count_overwrites_earlier() {
    let result = extract_profile(["10 followers", "20 followers"]);
    assert_eq!(result.followers, Some(20));
}

#[test]
fn overflowing_count_is_ignored() {
    let result = extract_profile(["99999999999999999999999 followers"]);
    assert_eq!(result.followers, None);
}

#[test]
fn normalize_count_examples() {
    assert_eq!(normalize_count("12,345"), Some(12_345));
    assert_eq!(normalize_count("1.234.567"), Some(1_234_567));
    assert_eq!(normalize_count("0"), Some(0));
    assert_eq!(normalize_count("18446744073709551616"), None);
}

// -----------------------------------------------------------------------
// username / bio
// -----------------------------------------------------------------------

#[test]
fn last_handle_line_wins() {
    let result = extract_profile(["hello", "@alice", "@bob_real"]);
    assert_eq!(result.username.as_deref(), Some("@bob_real"));
}

#[test]
fn first_long_line_is_bio() {
    let result = extract_profile(["hi", "this is a longer bio line", "another long line here"]);
    assert_eq!(result.bio.as_deref(), Some("this is a longer bio line"));
}

#[test]
fn two_word_line_is_not_bio() {
    let result = extract_profile(["Jane Doe", "photographer"]);
    assert_eq!(result.bio, None);
}

#[test]
fn one_line_can_be_username_and_bio() {
    let result = extract_profile(["contact me @ jane dot com", "@jane"]);
    assert_eq!(result.bio.as_deref(), Some("contact me @ jane dot com"));
    assert_eq!(result.username.as_deref(), Some("@jane"));
}

#[test]
fn count_line_can_become_bio() {
    let result = extract_profile(["120 posts 3,400 followers 98 following", "real bio text here"]);
    assert_eq!(
        result.bio.as_deref(),
        Some("120 posts 3,400 followers 98 following")
    );
}

// -----------------------------------------------------------------------
// whole-screen
// -----------------------------------------------------------------------

#[test]
fn typical_profile_screen() {
    let lines = to_lines(
        "jane_doe\n\
         Jane Doe\n\
         1,208 posts\n\
         54.3k followers\n\
         312 following\n\
         Travel photographer based in Lisbon\n\
         @jane_doe\n",
    );
    let result = extract_profile(&lines);
    assert_eq!(result.posts, Some(1_208));
    // "54.3k" has a letter between the digits and the label.
    assert_eq!(result.followers, None);
    assert_eq!(result.following, Some(312));
    assert_eq!(result.username.as_deref(), Some("@jane_doe"));
    assert_eq!(
        result.bio.as_deref(),
        Some("Travel photographer based in Lisbon")
    );
}

#[test]
fn extraction_is_idempotent() {
    let lines = ["@a", "5 posts", "10 followers", "a bio with words", "@b"];
    assert_eq!(extract_profile(lines), extract_profile(lines));
}
