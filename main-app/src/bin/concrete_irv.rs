// Copyright 2021-2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


use clap::{Parser};
use std::path::PathBuf;
use std::fs::File;
use anyhow::Context;
use irv::election_data::ElectionData;
use irv::errors::CountError;
use irv::random_util::Randomness;
use irv::tie_resolution::EliminationStrategy;
use main_app::{default_transcript_file, init_logging};

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="ConcreteIRV")]
/// Count a single winner instant runoff (ranked choice) election.
struct Opts {
    /// The .json or .csv file to get votes from.
    /// A .json file looks like {"options":["A","B"],"ballots":{"voter1":["B","A"],...}}.
    /// Each line of a .csv file is a voter id followed by their preferences in order.
    votes : PathBuf,

    /// Comma separated list of options. Required for a .csv file; overrides the options in a .json file.
    #[clap(short, long,value_delimiter=',')]
    options : Option<Vec<String>>,

    /// What to do when several options are tied for last: batch eliminates them all, random eliminates one of them chosen at random.
    #[clap(short, long,default_value_t=EliminationStrategy::Random)]
    strategy : EliminationStrategy,

    /// Seed for the random number generator, for a repeatable count. If not given, the operating system provides one.
    #[clap(long)]
    seed : Option<u64>,

    /// Instead of choosing at random, eliminate whichever tied option is listed first.
    #[clap(long,conflicts_with="seed")]
    deterministic : bool,

    /// An optional .transcript file to store the output in.
    /// If not specified, defaults to votes_strategy.transcript where votes and strategy are from above.
    #[clap(short, long)]
    transcript : Option<PathBuf>,

    /// Do not write a transcript file.
    #[clap(long,conflicts_with="transcript")]
    no_transcript : bool,

    /// Whether the progress of the count should be logged to stderr.
    #[clap(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();
    init_logging(opt.verbose);

    let votes = ElectionData::load(&opt.votes,opt.options.clone())?;
    votes.print_summary();

    let randomness = if opt.deterministic { Randomness::ReverseDonkeyVote }
        else if let Some(seed) = opt.seed { Randomness::seeded(seed) }
        else { Randomness::from_entropy() };
    let mut counter = votes.make_counter(opt.strategy)?.with_randomness(randomness);

    // a terminal tie still has rounds and a transcript worth showing.
    let result = match counter.count_votes(&votes.ballots) {
        Err(CountError::Invalid(e)) => return Err(e.into()),
        result => result,
    };
    for round in counter.round_results() {
        println!("{}",round);
    }

    if !opt.no_transcript {
        let transcript_file = opt.transcript.clone().unwrap_or_else(||default_transcript_file(&opt.votes,&opt.strategy.to_string()));
        if let Some(transcript) = counter.transcript() {
            if let Some(parent) = transcript_file.parent() { std::fs::create_dir_all(parent)? }
            let file = File::create(&transcript_file).with_context(||format!("Could not create {}",transcript_file.display()))?;
            serde_json::to_writer_pretty(file,&transcript)?;
        }
    }

    let winner = result?;
    println!("Winner : {}",winner);
    Ok(())
}
