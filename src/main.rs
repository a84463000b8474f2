// モザイク配置計算機 - コンソール

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mosaic_calc::domain::board::GridStore;
use mosaic_calc::infrastructure::{load_config, read_board};
use mosaic_calc::presentation::{render_friendly, render_grid, render_recommendation, RenderConfig};
use mosaic_calc::{logging, MoveInput, PlacementService, Recommendation};

#[derive(Parser)]
#[command(name = "mosaic-calc", version, about = "Rank open cells by how much they help complete mosaics")]
struct Cli {
    /// 盤面テキストファイル
    board: PathBuf,
    /// JSON 設定ファイル
    #[arg(long)]
    config: Option<PathBuf>,
    /// 盤面が埋まるまで推奨手を打つ
    #[arg(long)]
    solve: bool,
    /// 標準入力から `x y 色` / `solve` を読む
    #[arg(long)]
    interactive: bool,
    /// 実色を ANSI 色で表示
    #[arg(long)]
    highlight: bool,
    /// 半マスずらさず矩形に表示
    #[arg(long)]
    rectangular: bool,
    /// 推奨を JSON で出力
    #[arg(long)]
    json: bool,
    /// 表示する推奨の件数
    #[arg(long)]
    top: Option<usize>,
    /// 詳細ログの出力先
    #[arg(long)]
    log: Option<PathBuf>,
}

struct Console {
    service: PlacementService,
    render: RenderConfig,
    json: bool,
    top: Option<usize>,
}

impl Console {
    fn print_state(&self, grid: &GridStore) -> Result<()> {
        println!("{}", render_grid(grid, &self.render));
        println!();
        let ranked = self.service.rank(grid);
        let shown = self.top.unwrap_or(ranked.len()).min(ranked.len());
        if self.json {
            let records: Vec<Recommendation> = ranked[..shown].iter().map(Recommendation::from).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            for (i, cell) in ranked[..shown].iter().enumerate() {
                if i == 0 {
                    println!("{}  [{}]", render_recommendation(cell), render_friendly(cell));
                } else {
                    println!("{}", render_recommendation(cell));
                }
            }
        }
        println!("{} mosaics", grid.mosaic_count());
        Ok(())
    }

    fn solve(&self, grid: &mut GridStore) -> Result<()> {
        let moves = self.service.solve(grid)?;
        for cell in &moves {
            println!("place {} at ({}, {})", cell.color.name(), cell.x, cell.y);
        }
        println!();
        self.print_state(grid)
    }

    fn interactive(&self, grid: &mut GridStore) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        while !grid.is_full() {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("標準入力の読み込みに失敗")?;
            if line.trim().is_empty() {
                continue;
            }
            match MoveInput::parse(&line) {
                Ok(MoveInput::Solve) => return self.solve(grid),
                Ok(MoveInput::Place { x, y, color }) => {
                    // 契約違反は表示して続行
                    match self.service.apply_move(grid, x, y, color) {
                        Ok(()) => self.print_state(grid)?,
                        Err(e) => eprintln!("{:#}", e),
                    }
                }
                Err(e) => eprintln!("{:#}", e),
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        logging::init_log_file(path)
            .with_context(|| format!("ログファイルの初期化に失敗: {}", path.display()))?;
        logging::enable_verbose_logging();
    }

    let config = load_config(cli.config.as_deref())?;
    let service = PlacementService::new(config);
    let text = read_board(&cli.board)?;
    let mut grid = service.load_board(&text)?;

    let console = Console {
        service,
        render: RenderConfig {
            highlight: cli.highlight,
            rectangular: cli.rectangular,
        },
        json: cli.json,
        top: cli.top,
    };

    console.print_state(&grid)?;
    if cli.solve {
        println!();
        console.solve(&mut grid)?;
    } else if cli.interactive {
        console.interactive(&mut grid)?;
    }
    Ok(())
}
