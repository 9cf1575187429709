use cosmwasm_schema::write_api;
use cube_rs::token::{
    CubeTokenExecuteMsg, CubeTokenInstantiateMsg, CubeTokenMigrateMsg, CubeTokenQueryMsg,
};

fn main() {
    write_api! {
        instantiate: CubeTokenInstantiateMsg,
        execute: CubeTokenExecuteMsg,
        query: CubeTokenQueryMsg,
        migrate: CubeTokenMigrateMsg,
    }
}
