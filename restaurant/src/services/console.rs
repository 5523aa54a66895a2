//! Terminal console over async line I/O
//!
//! Generic over the reader and writer so the same code drives stdin/stdout in
//! production and in-memory buffers in tests.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::RestaurantResult;
use crate::traits::Console;

pub struct RealConsole<R, W> {
    reader: R,
    writer: W,
}

impl RealConsole<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> RealConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn write_flush(&mut self, text: &str) -> RestaurantResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<R, W> Console for RealConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show(&mut self, text: &str) -> RestaurantResult<()> {
        self.write_flush(&format!("{text}\n")).await
    }

    async fn read_line(&mut self, prompt: &str) -> RestaurantResult<Option<String>> {
        self.write_flush(prompt).await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn alert(&mut self, title: &str, message: &str) -> RestaurantResult<()> {
        let block = if message.is_empty() {
            format!("\n[!] {title}\n\n")
        } else {
            format!("\n[!] {title}\n    {message}\n\n")
        };
        self.write_flush(&block).await
    }
}
