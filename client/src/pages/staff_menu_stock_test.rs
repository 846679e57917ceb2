use super::*;

fn filled() -> MenuItemForm {
    MenuItemForm {
        name: " Flat white ".to_owned(),
        description: " Double shot ".to_owned(),
        price: "۹۵,۰۰۰".to_owned(),
        category_id: "3".to_owned(),
        is_available: false,
    }
}

#[test]
fn default_form_is_available_and_incomplete() {
    let form = MenuItemForm::default();
    assert!(form.is_available);
    assert!(!form.can_submit());
    assert_eq!(form.to_request(), None);
}

#[test]
fn each_required_field_blocks_submit() {
    let strips: [fn(&mut MenuItemForm); 3] = [
        |f| f.name = " ".to_owned(),
        |f| f.price = String::new(),
        |f| f.category_id = String::new(),
    ];
    for strip in strips {
        let mut form = filled();
        strip(&mut form);
        assert!(!form.can_submit());
    }
}

#[test]
fn request_is_trimmed_and_price_normalised() {
    let request = filled().to_request().unwrap();
    assert_eq!(request.name, "Flat white");
    assert_eq!(request.description, "Double shot");
    assert_eq!(request.price, "95000");
    assert_eq!(request.category_id, 3);
    assert!(!request.is_available);
}
