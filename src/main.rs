// What you SEE:
// • A dark dial with N/E/S/W around it and the 16x16 needle sprite, blown up 8x.
// • Left click anywhere: the needle turns to point from the center toward the click.
// • S sweeps the needle over a full turn and saves the result (native + 8x PNG).
// • Q or ESC quits.

mod app;
mod color;
mod compositor;
mod config;
mod draw;
mod error;
mod texture;
mod types;

use app::CompassApp;
use config::Args;
use draw::Drawer;
use error::Error;
use log::{error, info};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    /* --- State + window setup ---
       Visual: window opens showing the needle pointing north. */
    let mut app = CompassApp::new(&args)?;
    let size = app.window_size;
    let mut drawer = Drawer::new("Compass Generator", size, size)?;
    let mut screen = FrameBuffer::new(size, size);

    info!("compass generator started");
    info!("click anywhere in the window to set the heading; S saves, Q quits");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.quit_pressed() {
        /* 1) Inputs */
        if let Some((mx, my)) = drawer.left_click() {
            app.click(mx, my); // visual: needle turns toward the click
        }

        if drawer.s_pressed_once() {
            // A failed save should not take the window down with it.
            if let Err(e) = app.save() {
                error!("{e}");
            }
        }

        /* 2) Draw the dial, letters, needle, HUD */
        app.render(&mut screen);

        /* 3) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
    }

    Ok(())
}
