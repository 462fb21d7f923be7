use chrono::{Duration as ChronoDuration, Utc};
use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use uuid::Uuid;

const STAGE_SECS: u64 = 20;
const CONTENDERS: usize = 64;

/// An endpoint under load. Targets with a body are POSTed, the rest are GETs.
struct Target {
    name: &'static str,
    url: String,
    body: Option<Value>,
}

impl Target {
    fn get(name: &'static str, url: String) -> Self {
        Self { name, url, body: None }
    }

    fn post(name: &'static str, url: String, body: Value) -> Self {
        Self { name, url, body: Some(body) }
    }

    fn request(&self, client: &Client) -> RequestBuilder {
        match &self.body {
            Some(body) => client.post(&self.url).json(body),
            None => client.get(&self.url),
        }
    }
}

#[derive(Default)]
struct StageTally {
    ok: u64,
    conflicts: u64,
    failed: u64,
}

impl StageTally {
    fn record(&mut self, status: Option<StatusCode>) {
        match status {
            Some(s) if s.is_success() => self.ok += 1,
            Some(s) if s == StatusCode::CONFLICT => self.conflicts += 1,
            _ => self.failed += 1,
        }
    }

    fn sent(&self) -> u64 {
        self.ok + self.conflicts + self.failed
    }
}

#[tokio::main]
async fn main() {
    let base_url = std::env::var("BENCH_BASE_URL").unwrap_or_else(|_| "http://localhost:5003".to_string());

    println!("{}", "🚀 Starting Benchmark Suite".bold().green());
    println!("Target URL: {}", base_url);
    println!("{}", "Start the server with RATE_LIMIT_MAX=0, or later stages will be throttled.".dimmed());

    let client = Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client");

    if client.get(format!("{}/health", base_url)).send().await.is_err() {
        eprintln!("{}", format!("❌ Server is NOT reachable at {}. Please start it first.", base_url).red().bold());
        return;
    }

    // Spread runs across the calendar so repeated runs do not collide.
    let offset_days = (Uuid::new_v4().as_u128() % 3000) as i64 + 365;
    let checkin = Utc::now().date_naive() + ChronoDuration::days(offset_days);
    let checkout = checkin + ChronoDuration::days(3);

    run_contention(&client, &base_url, &checkin.to_string(), &checkout.to_string()).await;

    let stay = json!({
        "checkin": checkin.to_string(),
        "checkout": checkout.to_string(),
        "guests": 2
    });
    // Room 102 is taken by the first request of the first stage; every later
    // attempt must come back as a conflict.
    let repeat_booking = json!({
        "roomId": "102",
        "name": "Bench Repeat",
        "email": "bench-repeat@example.com",
        "checkin": checkin.to_string(),
        "checkout": checkout.to_string(),
        "guests": 2
    });

    let targets = vec![
        Target::get("Health Check", format!("{}/health", base_url)),
        Target::get("Room Catalog", format!("{}/api/v1/rooms", base_url)),
        Target::post("Availability Check", format!("{}/api/v1/availability", base_url), stay),
        Target::post("Repeat Booking (conflicts expected)", format!("{}/api/v1/bookings", base_url), repeat_booking),
    ];

    let rps_stages = [10, 50, 200, 1000];

    for target in targets {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking Endpoint: {}", target.name.cyan().bold());
        println!("URL: {}", target.url);
        println!("{}", "=".repeat(60));

        println!(
            "{:>6} | {:>7} | {:>9} | {:>9} | {:>7} | {:>9} | {:>6}",
            "RPS", "Sent", "Mean ms", "P99 ms", "OK", "Conflicts", "Failed"
        );

        for rps in rps_stages {
            run_stage(&client, &target, rps).await;
        }
    }
}

/// Fires simultaneous bookings for one room and one date range. Exactly one
/// may be admitted; everything else must come back as a conflict.
async fn run_contention(client: &Client, base_url: &str, checkin: &str, checkout: &str) {
    println!("\n{}", "⚔️  Contention burst: same room, same dates".yellow());

    let mut set = JoinSet::new();
    for i in 0..CONTENDERS {
        let client = client.clone();
        let url = format!("{}/api/v1/bookings", base_url);
        let body = json!({
            "roomId": "101",
            "name": format!("Bench Guest {}", i),
            "email": format!("bench-{}@example.com", i),
            "checkin": checkin,
            "checkout": checkout,
            "guests": 1
        });
        set.spawn(async move {
            client.post(&url).json(&body).send().await.map(|r| r.status())
        });
    }

    let (mut created, mut conflicts, mut other) = (0, 0, 0);
    while let Some(res) = set.join_next().await {
        match res {
            Ok(Ok(status)) if status == StatusCode::CREATED => created += 1,
            Ok(Ok(status)) if status == StatusCode::CONFLICT => conflicts += 1,
            _ => other += 1,
        }
    }

    println!("   created={} conflicts={} other={}", created, conflicts, other);
    if created == 1 && other == 0 {
        println!("{}", "✅ No double booking under contention.".green());
    } else {
        println!("{}", "❌ Admission invariant violated or requests failed!".red().bold());
    }
}

/// Paces requests at `rps` for one stage, then reports latency and how the
/// responses split between success, conflict and failure.
async fn run_stage(client: &Client, target: &Target, rps: u32) {
    let Some(rate) = NonZeroU32::new(rps) else {
        return;
    };
    let pacer = RateLimiter::direct(Quota::per_second(rate));
    let deadline = Instant::now() + Duration::from_secs(STAGE_SECS);
    let mut inflight = JoinSet::new();

    while Instant::now() < deadline {
        pacer.until_ready().await;
        let request = target.request(client);
        inflight.spawn(async move {
            let started = Instant::now();
            let status = request.send().await.map(|r| r.status()).ok();
            (started.elapsed(), status)
        });
    }

    let mut latencies = Histogram::<u64>::new(3).expect("valid histogram precision");
    let mut tally = StageTally::default();
    while let Some(joined) = inflight.join_next().await {
        match joined {
            Ok((elapsed, status)) => {
                let _ = latencies.record(elapsed.as_micros() as u64);
                tally.record(status);
            }
            Err(_) => tally.record(None),
        }
    }

    let row = format!(
        "{:>6} | {:>7} | {:>9.2} | {:>9.2} | {:>7} | {:>9} | {:>6}",
        rps,
        tally.sent(),
        latencies.mean() / 1000.0,
        latencies.value_at_quantile(0.99) as f64 / 1000.0,
        tally.ok,
        tally.conflicts,
        tally.failed,
    );
    if tally.failed > 0 {
        println!("{}", row.red());
    } else {
        println!("{}", row);
    }
}
