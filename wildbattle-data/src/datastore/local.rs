use std::{
    env,
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    CatalogCreature,
    CatalogList,
    Creature,
    DataStore,
    Id,
    Identifiable,
    MoveData,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// The directory mirrors the catalog's layout: a `roster.json` list, one creature record per file
/// under `pokemon/`, and one move record per file under `move/`. Everything is read once, up front.
#[derive(Debug)]
pub struct LocalDataStore {
    root: PathBuf,
    pub roster: Vec<String>,
    pub creatures: HashMap<Id, Creature>,
    pub numbers: HashMap<u16, Id>,
    pub moves: HashMap<Id, MoveData>,
}

impl LocalDataStore {
    const ROSTER_FILE: &'static str = "roster.json";
    const CREATURES_DIR: &'static str = "pokemon";
    const MOVES_DIR: &'static str = "move";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.exists() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self {
            root,
            roster: Vec::new(),
            creatures: HashMap::default(),
            numbers: HashMap::default(),
            moves: HashMap::default(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn initialize(&mut self) -> Result<()> {
        let roster: CatalogList = read_json(&self.root().join(Self::ROSTER_FILE))
            .context("failed to read roster")?;
        self.roster = roster.results.into_iter().map(|entry| entry.name).collect();

        let creatures = self
            .read_all_files_in_directory::<CatalogCreature>(Self::CREATURES_DIR)?
            .into_iter()
            .map(Creature::try_from)
            .collect::<Result<Vec<_>>>()?;
        for creature in creatures {
            let id = creature.id();
            self.numbers.insert(creature.number, id.clone());
            self.creatures.insert(id, creature);
        }

        self.moves = self
            .read_all_files_in_directory::<MoveData>(Self::MOVES_DIR)?
            .into_iter()
            .map(|mov| (mov.id(), mov))
            .collect();

        Ok(())
    }

    fn read_all_files_in_directory<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        self.root()
            .join(dir)
            .read_dir()
            .context(format!("failed to read {dir} directory"))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .map(|path| {
                read_json(&path).context(format!(
                    "failed to read {dir} data from {}",
                    path.display()
                ))
            })
            .collect()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).context(format!("{} could not be opened", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .context(format!("{} could not be parsed", path.display()))
}

impl DataStore for LocalDataStore {
    fn roster(&self) -> Result<Vec<String>> {
        Ok(self.roster.clone())
    }

    fn get_creature(&self, id: &Id) -> Result<Option<Creature>> {
        Ok(self.creatures.get(id).cloned())
    }

    fn get_creature_by_number(&self, number: u16) -> Result<Option<Creature>> {
        Ok(self
            .numbers
            .get(&number)
            .and_then(|id| self.creatures.get(id))
            .cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }
}
