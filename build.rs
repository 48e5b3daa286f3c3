use dotenvy::dotenv;

fn main() {
   // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // the URL is public, so a fresh checkout without a .env still builds
  dotenv().ok();

  let app_url = std::env::var("PLATFORM_APP_URL").unwrap_or_else(|_| String::from("https://app.assetra.io"));
  println!("cargo::rustc-env=PLATFORM_APP_URL={}", app_url);
}
