// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_page(sections: usize) -> String {
    let single = concat!(
        r#"[et_pb_section _builder_version="4.4.8"][et_pb_column type="4_4"]"#,
        r#"[et_pb_text]<h2>Heading</h2><p>Paragraph with <strong>bold</strong> and a <a href="/x">link</a>.</p>[/et_pb_text]"#,
        r#"[et_pb_image src="/wp-content/uploads/hero.jpg"][/et_pb_image]"#,
        r#"[/et_pb_column][/et_pb_section]"#,
    );
    let split = concat!(
        r#"[et_pb_section][et_pb_column type="1_2"]"#,
        r#"[et_pb_row_inner][et_pb_text]Left[/et_pb_text][/et_pb_row]"#,
        r#"[et_pb_button button_url="/contact" button_text="Contact"][/et_pb_button]"#,
        r#"[/et_pb_column][et_pb_column type="1_2"][et_pb_divider /][/et_pb_column][/et_pb_section]"#,
    );

    let mut page = String::new();
    for i in 0..sections {
        page.push_str(if i % 2 == 0 { single } else { split });
        page.push('\n');
    }
    page
}
