use super::*;

#[test]
fn location_label_skips_blanks() {
    assert_eq!(location_label("Tehran", "Tehran"), "Tehran, Tehran");
    assert_eq!(location_label(" ", "Fars"), "Fars");
    assert_eq!(location_label("", ""), "");
}

#[test]
fn submitted_filter_restarts_at_page_one() {
    let draft = FreelancerFilter {
        page: 5,
        q: "  logo ".to_owned(),
        city: " Shiraz ".to_owned(),
        tag: "design".to_owned(),
        flair: String::new(),
        work_type: "remote".to_owned(),
    };
    let applied = submitted(&draft);
    assert_eq!(applied.page, 1);
    assert_eq!(applied.q, "logo");
    assert_eq!(applied.city, "Shiraz");
    assert_eq!(applied.tag, "design");
    assert_eq!(applied.work_type, "remote");
}

#[test]
fn specialty_names_include_custom_entries() {
    let card = FreelancerCard {
        id: 1,
        public_slug: "nima".to_owned(),
        full_name: String::new(),
        headline: String::new(),
        introduction: String::new(),
        city: String::new(),
        province: String::new(),
        work_types: Vec::new(),
        specialties: vec![Specialty {
            id: 2,
            name: "Illustration".to_owned(),
            slug: "illustration".to_owned(),
        }],
        custom_specialties: vec!["Calligraphy".to_owned()],
        flairs: Vec::new(),
        services: Vec::new(),
    };
    assert_eq!(specialty_names(&card), vec!["Illustration".to_owned(), "Calligraphy".to_owned()]);
}
