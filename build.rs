#[cfg(target_os = "macos")]
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Handle SDL2 library linking
    link_sdl2_library();
}

fn link_sdl2_library() {
    // Check if we're on macOS
    #[cfg(target_os = "macos")]
    {
        // Try to find the SDL2 library via homebrew
        if let Ok(true) = is_homebrew_available() {
            println!("Homebrew detected, trying to locate the SDL2 library...");

            if let Ok(sdl2_path) = get_homebrew_path("sdl2") {
                println!("cargo:rustc-link-search={}/lib", sdl2_path);
                println!("cargo:rustc-link-lib=SDL2");
            } else {
                println!("SDL2 not found via homebrew, you may need to install it with 'brew install sdl2'");
            }

            // Link system frameworks
            println!("cargo:rustc-link-lib=framework=CoreFoundation");
            println!("cargo:rustc-link-lib=framework=CoreGraphics");
            println!("cargo:rustc-link-lib=framework=CoreAudio");
            println!("cargo:rustc-link-lib=framework=AudioToolbox");
            println!("cargo:rustc-link-lib=framework=Metal");
        } else {
            println!("Homebrew not found. Please install the SDL2 library manually and set appropriate environment variables.");
        }
    }

    // For Linux systems
    #[cfg(target_os = "linux")]
    {
        println!("On Linux, you may need to install the SDL2 library with your package manager.");
        println!("For example: sudo apt-get install libsdl2-dev");
    }

    // For Windows systems
    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure the SDL2 library is in your PATH or use appropriate environment variables.");
    }
}

#[cfg(target_os = "macos")]
fn is_homebrew_available() -> Result<bool, String> {
    match Command::new("brew").arg("--version").output() {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[cfg(target_os = "macos")]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(&["--prefix", package]).output() {
        Ok(output) => {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(path)
            } else {
                Err(format!("Package {} not found in homebrew", package))
            }
        }
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}
