//! Search, look up a video and resolve a download link
//!
//! Run with: cargo run --example quickstart -p y2mate-core

use tracing_subscriber::EnvFilter;
use y2mate_core::Y2MateClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("y2mate_core=debug"))
        .init();

    let client = Y2MateClient::new()?;

    println!("Searching for 'The Girl I Like Forgot Her Glasses OP'...\n");
    let result = client.search("The Girl I Like Forgot Her Glasses OP").await?;

    for (i, video) in result.videos.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, video.title);
        println!("   ID: {}", video.video_id);
        println!("   Thumbnail: {}", video.thumbnail_url());
    }

    let metadata = client
        .from_url("https://youtu.be/mpWnhkMLIu4?feature=shared")
        .await?;

    println!("\n{} ({})", metadata.title, metadata.video_id);
    for link in metadata.links() {
        println!("   {:>5} {:>8} {}", link.format, link.quality, link.size);
    }
    if let Some(related) = &metadata.related_videos {
        println!("   {} related videos", related.len());
    }

    let Some(link) = metadata.video_links.first() else {
        println!("No video links available!");
        return Ok(());
    };

    match client.get_download_info(&metadata.video_id, &link.key).await {
        Ok(info) => {
            println!("\n✓ Download link ({} {}):", info.format, info.quality);
            println!("{}", info.download_link);
        }
        Err(e) => println!("\n✗ Failed to resolve download link: {}", e),
    }

    Ok(())
}
