use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, put, web};

use rs_namegen_core::io::{list_files, normalize_folder, resolve_profile};
use rs_namegen_core::{Generator, Profile, Strategy};
use serde::Deserialize;

const DATA_FOLDER: &str = "./data";
const PROFILE_EXTENSIONS: &[&str] = &["json", "txt"];
const MAX_COUNT: usize = 1000;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	strategy: Option<String>,
	min_length: Option<usize>,
	max_length: Option<usize>,
	seed: Option<u64>,
}

#[derive(Deserialize)]
struct ProfileQuery {
	names: Option<String>,
}

struct SharedData {
	generator: Generator,
}

/// Splits a comma separated list of profile names, dropping blanks.
fn parse_names(names: Option<&str>) -> Result<Vec<&str>, String> {
	let names: Vec<&str> = names
		.unwrap_or_default()
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.collect();

	match names.len() {
		0 => Err("Missing or empty profile name".into()),
		1 | 2 => Ok(names),
		_ => Err("At most two profiles can be blended".into()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` names with the loaded profiles and returns them as JSON.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	if count == 0 || count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be between 1 and {MAX_COUNT}"));
	}

	let strategy = match query.strategy.as_deref().map(str::parse::<Strategy>).transpose() {
		Ok(s) => s.unwrap_or(Strategy::Random),
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let min_length = query.min_length.unwrap_or(0);
	let max_length = query.max_length.unwrap_or(0);
	if let Err(e) = shared_data.generator.configure(strategy, min_length, max_length, query.seed) {
		return HttpResponse::BadRequest().body(e.to_string());
	}

	HttpResponse::Ok().json(shared_data.generator.generate_batch(count))
}

#[get("/v1/profiles")]
async fn get_profiles() -> impl Responder {
	match list_files(normalize_folder(DATA_FOLDER), PROFILE_EXTENSIONS) {
		Ok(files) => HttpResponse::Ok().json(files),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list profiles"),
	}
}

#[get("/v1/loaded_profiles")]
async fn get_loaded_profiles(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().json(shared_data.generator.profile_names())
}

/// HTTP PUT endpoint `/v1/load_profiles?names=primary[,secondary]`
///
/// Nothing is replaced unless every requested profile loads.
#[put("/v1/load_profiles")]
async fn put_profiles(data: web::Data<Mutex<SharedData>>, query: web::Query<ProfileQuery>) -> impl Responder {
	let names = match parse_names(query.names.as_deref()) {
		Ok(n) => n,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let folder = normalize_folder(DATA_FOLDER);
	let mut paths = Vec::with_capacity(names.len());
	for name in names {
		match resolve_profile(&folder, name, PROFILE_EXTENSIONS) {
			Ok(path) => paths.push((name, path)),
			Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
		}
	}

	let mut profiles = Vec::with_capacity(paths.len());
	for (name, path) in paths {
		match Profile::new(path) {
			Ok(p) => profiles.push(p),
			Err(e) => {
				log::warn!("Failed to load profile '{name}': {e}");
				return HttpResponse::InternalServerError().body(format!("Failed to load profile: {e}"));
			}
		}
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	shared_data.generator.clear_profiles();
	let mut profiles = profiles.into_iter();
	if let Some(primary) = profiles.next() {
		shared_data.generator.set_profile(primary);
	}
	if let Some(secondary) = profiles.next() {
		shared_data.generator.set_second_profile(secondary);
	}
	log::info!("Loaded profiles: {:?}", shared_data.generator.profile_names());

	HttpResponse::Ok().body("Profiles loaded successfully")
}

/// Main entry point for the server.
///
/// Starts without any profile (pattern-based names) and binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let shared_data = SharedData { generator: Generator::new() };
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	log::info!("Listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_generator.clone())
			.service(get_generated)
			.service(get_profiles)
			.service(put_profiles)
			.service(get_loaded_profiles)
	})
	.bind(("127.0.0.1", 5000))?
	.run()
	.await
}
