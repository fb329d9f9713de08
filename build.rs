const COMMANDS: &[&str] = &["pick_image", "pick_archive", "import_file", "export_file"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
