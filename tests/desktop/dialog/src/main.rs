use pickkit_dialogs::{DirectoryPicker, FilePicker, FileSaver, PickerMode, PickerType};

#[tokio::main]
async fn main() {
    println!("Testing Dialogs...");
    pickkit_dialogs::init();

    // Test File Picker
    println!("Showing File Picker...");
    match FilePicker::new()
        .with_title("Select text files")
        .with_type(PickerType::files_with_extensions(["txt", "rs"]))
        .with_mode(PickerMode::Multiple { max_items: Some(3) })
        .pick()
        .await
    {
        Ok(Some(files)) => {
            for file in files {
                println!("File selected: {} ({:?})", file.name(), file.path());
            }
        }
        Ok(None) => println!("No file selected (cancelled)."),
        Err(e) => println!("Error showing file picker: {e}"),
    }

    // Test File Saver
    println!("Showing File Saver...");
    match FileSaver::new("report").with_extension("pdf").save().await {
        Ok(Some(file)) => println!("Save destination: {:?}", file.path()),
        Ok(None) => println!("Save cancelled."),
        Err(e) => println!("Error showing file saver: {e}"),
    }

    // Test Directory Picker
    println!("Showing Directory Picker...");
    match DirectoryPicker::new()
        .with_title("Select a folder")
        .pick()
        .await
    {
        Ok(Some(dir)) => println!("Directory selected: {:?}", dir.path()),
        Ok(None) => println!("No directory selected (cancelled)."),
        Err(e) => println!("Error showing directory picker: {e}"),
    }
}
