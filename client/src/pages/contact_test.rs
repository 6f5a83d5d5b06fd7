use super::*;

#[test]
fn whatsapp_url_encodes_text() {
    assert_eq!(whatsapp_url("Hi there"), "https://wa.me/6281246034451?text=Hi%20there");
}

#[test]
fn contact_message_lists_every_field() {
    let draft = ContactDraft {
        name: " Ayu ".to_owned(),
        email: "ayu@mail.test".to_owned(),
        subject: "Pesanan".to_owned(),
        message: "Vas 3 buah".to_owned(),
    };
    assert_eq!(
        contact_message(&draft),
        "Hello Henart Design!\n\nName: Ayu\nEmail: ayu@mail.test\nSubject: Pesanan\n\nMessage:\nVas 3 buah"
    );
}
