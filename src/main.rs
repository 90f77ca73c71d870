// src/main.rs
//
// Fractions Q-pur: point d’entrée ligne de commande
// --------------------------------------------------
//   fraction_qpur "<numérateur>" ["<dénominateur>"] [--demarche]
//
// - Sortie : forme canonique (n ou n/d) sur stdout
// - Erreur : message + chaîne des causes sur stderr, code 1
// - Logs   : RUST_LOG=debug (env_logger)

use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use fraction_qpur::noyau::limites::{EXPOSANT_MAX_DEFAUT, PROFONDEUR_MAX_DEFAUT};
use fraction_qpur::{evaluer_avec_demarche, format_rat, Erreur, Limites, PaireExpr};

#[derive(Parser, Debug)]
#[command(about = "Évalue une fraction d’expressions en rationnel exact")]
struct Cli {
    /// Expression du numérateur (ex: "(10 + 100) * 3")
    #[arg(allow_hyphen_values = true)]
    numerateur: String,

    /// Expression du dénominateur ("" ou "1" : pas de division)
    #[arg(default_value = "", allow_hyphen_values = true)]
    denominateur: String,

    /// Imbrication max ('(' , signes unaires, '**')
    #[arg(long, default_value_t = PROFONDEUR_MAX_DEFAUT)]
    profondeur_max: usize,

    /// |exposant| max pour '**'
    #[arg(long, default_value_t = EXPOSANT_MAX_DEFAUT)]
    exposant_max: u32,

    /// Affiche les jetons lus pour chaque expression
    #[arg(long)]
    demarche: bool,
}

fn afficher_erreur(e: &Erreur) {
    eprintln!("erreur : {e}");
    let mut cause = e.source();
    while let Some(c) = cause {
        eprintln!("  cause : {c}");
        cause = c.source();
    }
}

fn afficher_demarche(paire: &PaireExpr, limites: &Limites) {
    let cotes = [("numérateur", &paire.numerateur), ("dénominateur", &paire.denominateur)];
    for (nom, texte) in cotes {
        if texte.trim().is_empty() {
            continue;
        }
        // les erreurs sont rapportées par l’évaluation principale
        if let Ok((_, d)) = evaluer_avec_demarche(texte, limites) {
            println!("{nom} : [{}] = {}", d.jetons, d.resultat);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let limites = Limites::default()
        .profondeur_max(cli.profondeur_max)
        .exposant_max(cli.exposant_max);
    let paire = PaireExpr::new(cli.numerateur, cli.denominateur);
    info!("évaluation de {paire} ({limites:?})");

    if cli.demarche {
        afficher_demarche(&paire, &limites);
    }

    match paire.evaluer_avec(&limites) {
        Ok(r) => {
            println!("{}", format_rat(&r));
            ExitCode::SUCCESS
        }
        Err(e) => {
            afficher_erreur(&e);
            ExitCode::FAILURE
        }
    }
}
