use super::*;

fn post() -> Post {
    Post {
        id: 1,
        title: "Opening night".to_owned(),
        slug: "opening-night".to_owned(),
        excerpt: String::new(),
        hero_image_url: None,
        hero_image_alt: String::new(),
        content_blocks: vec![
            ContentBlock::Heading {
                text: "Welcome".to_owned(),
            },
            ContentBlock::Paragraph {
                text: "We opened our doors.".to_owned(),
            },
        ],
        canonical_url: None,
        og_image_url: None,
        author_name: Some(" Lea ".to_owned()),
        published_at: Some("2025-02-14T18:00:00Z".to_owned()),
        tags: Vec::new(),
    }
}

#[test]
fn description_falls_back_to_first_paragraph() {
    assert_eq!(post_description(&post()), "We opened our doors.");
    let mut with_excerpt = post();
    with_excerpt.excerpt = "Short summary".to_owned();
    assert_eq!(post_description(&with_excerpt), "Short summary");
}

#[test]
fn byline_combines_author_and_date() {
    assert_eq!(byline(&post()), "Lea · 2025-02-14");
    let mut anonymous = post();
    anonymous.author_name = None;
    assert_eq!(byline(&anonymous), "2025-02-14");
    anonymous.published_at = None;
    assert_eq!(byline(&anonymous), "");
}
