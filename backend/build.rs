use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    if dist_dir.exists() {
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .expect("copy frontend bundle");
    } else {
        // `include_dir!` needs the directory to exist even without a bundle.
        fs::create_dir_all(out_dir.join("dist")).expect("create empty bundle dir");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
