use dialoguer::Input;

/// Počká na Enter před ukončením (okno konzole se po dvojkliku nezavře)
///
/// Mimo terminál se nic nečeká.
pub fn wait_for_exit() {
    println!();
    let _ = Input::<String>::new()
        .with_prompt("Stiskněte Enter pro ukončení...")
        .allow_empty(true)
        .report(false)
        .interact_text();
}
