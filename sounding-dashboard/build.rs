use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the curated station index into OUT_DIR for include_str
    let index_src = Path::new("../fixtures/station-index.csv");
    if index_src.exists() {
        fs::copy(index_src, Path::new(&out_dir).join("station-index.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("station-index.csv"),
            "filename,date,locn,drop,lat,long\n\
             data/33RR20180918_00001_00002_ct1.csv,20180918,00001,00002,56.05826,-156.9622\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/station-index.csv");
}
